/// Mock graphics device for unit tests (no GPU required)
///
/// Every creation, context command and release is appended to one shared
/// event log, so tests can assert on ordering across device, context,
/// swapchain and program. Named operations can be made to fail.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use glam::Mat4;
use rustc_hash::{FxHashMap, FxHashSet};
use crate::error::{Error, Result};
use crate::graphics_device::{
    Buffer, BufferDesc, BufferUsage, DepthStencilView, GraphicsContext, GraphicsDevice, Image,
    ImageDesc, ImageUsage, IndexType, InputLayout, InputSignature, ParameterHandle,
    ParameterKind, PrimitiveTopology, ReadView, RenderTargetView, ResourceId, ShadingProgram,
    Swapchain, SwapchainDesc, TechniqueHandle, VertexLayout, Viewport,
};

/// Shared, ordered event log
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// Operation names (or "operation label" pairs) that must fail
pub type FailureSet = Arc<Mutex<FxHashSet<String>>>;

fn push(events: &EventLog, event: impl Into<String>) {
    events.lock().unwrap().push(event.into());
}

fn should_fail(failures: &FailureSet, operation: &str, label: &str) -> bool {
    let failures = failures.lock().unwrap();
    failures.contains(operation) || failures.contains(&format!("{} {}", operation, label))
}

fn injected(operation: &str) -> Error {
    Error::BackendError(format!("mock: injected failure in {}", operation))
}

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub label: String,
    pub size: u64,
    pub usage: BufferUsage,
    events: EventLog,
}

impl Buffer for MockBuffer {
    fn size(&self) -> u64 {
        self.size
    }

    fn usage(&self) -> BufferUsage {
        self.usage
    }
}

impl Drop for MockBuffer {
    fn drop(&mut self) {
        push(&self.events, format!("release {}", self.label));
    }
}

// ============================================================================
// Mock Image / ReadView
// ============================================================================

#[derive(Debug)]
pub struct MockImage {
    pub desc: ImageDesc,
    pub uploaded_bytes: usize,
    events: EventLog,
}

impl Image for MockImage {
    fn desc(&self) -> &ImageDesc {
        &self.desc
    }
}

impl Drop for MockImage {
    fn drop(&mut self) {
        push(&self.events, format!("release {}", self.desc.label));
    }
}

#[derive(Debug)]
pub struct MockReadView {
    pub id: ResourceId,
    pub label: String,
    events: EventLog,
}

impl ReadView for MockReadView {
    fn id(&self) -> ResourceId {
        self.id
    }
}

impl Drop for MockReadView {
    fn drop(&mut self) {
        push(&self.events, format!("release {}", self.label));
    }
}

// ============================================================================
// Mock InputLayout
// ============================================================================

#[derive(Debug)]
pub struct MockInputLayout {
    pub layout: VertexLayout,
    events: EventLog,
}

impl InputLayout for MockInputLayout {
    fn layout(&self) -> &VertexLayout {
        &self.layout
    }
}

impl Drop for MockInputLayout {
    fn drop(&mut self) {
        push(&self.events, "release input_layout");
    }
}

// ============================================================================
// Mock attachment views
// ============================================================================

#[derive(Debug)]
pub struct MockRenderTargetView {
    events: EventLog,
}

impl RenderTargetView for MockRenderTargetView {}

impl Drop for MockRenderTargetView {
    fn drop(&mut self) {
        push(&self.events, "release render_target_view");
    }
}

#[derive(Debug)]
pub struct MockDepthStencilView {
    events: EventLog,
}

impl DepthStencilView for MockDepthStencilView {}

impl Drop for MockDepthStencilView {
    fn drop(&mut self) {
        push(&self.events, "release depth_stencil_view");
    }
}

// ============================================================================
// Mock Swapchain
// ============================================================================

#[derive(Debug)]
pub struct MockSwapchain {
    pub desc: SwapchainDesc,
    events: EventLog,
    failures: FailureSet,
}

impl Swapchain for MockSwapchain {
    fn desc(&self) -> &SwapchainDesc {
        &self.desc
    }

    fn back_buffer(&self) -> Result<Box<dyn Image>> {
        if should_fail(&self.failures, "back_buffer", "") {
            return Err(injected("back_buffer"));
        }
        push(&self.events, "back_buffer");
        Ok(Box::new(MockImage {
            desc: ImageDesc {
                label: "back_buffer".to_string(),
                width: self.desc.width,
                height: self.desc.height,
                format: self.desc.format,
                usage: ImageUsage::RenderTarget,
            },
            uploaded_bytes: 0,
            events: self.events.clone(),
        }))
    }

    fn present(&mut self) -> Result<()> {
        if should_fail(&self.failures, "present", "") {
            return Err(injected("present"));
        }
        push(&self.events, "present");
        Ok(())
    }
}

impl Drop for MockSwapchain {
    fn drop(&mut self) {
        push(&self.events, "release swapchain");
    }
}

// ============================================================================
// Mock ShadingProgram
// ============================================================================

/// Techniques and parameters a mock program exposes
#[derive(Debug, Clone)]
pub struct MockProgramDesc {
    /// (technique name, pass count)
    pub techniques: Vec<(String, u32)>,
    /// (parameter name, kind)
    pub parameters: Vec<(String, ParameterKind)>,
}

impl MockProgramDesc {
    /// The three sampling techniques with one pass each, and every viewer parameter
    pub fn standard() -> Self {
        Self::with_passes(1)
    }

    pub fn with_passes(pass_count: u32) -> Self {
        let techniques = ["PointTechnique", "LinearTechnique", "AnisotropicTechnique"]
            .iter()
            .map(|name| (name.to_string(), pass_count))
            .collect();
        let parameters = [
            ("gWorldViewProj", ParameterKind::Matrix),
            ("gWorldMatrix", ParameterKind::Matrix),
            ("gViewInverseMatrix", ParameterKind::Matrix),
            ("gDiffuseMap", ParameterKind::ShaderResource),
            ("gNormalMap", ParameterKind::ShaderResource),
            ("gSpecularMap", ParameterKind::ShaderResource),
            ("gGlossinessMap", ParameterKind::ShaderResource),
        ]
        .iter()
        .map(|(name, kind)| (name.to_string(), *kind))
        .collect();
        Self { techniques, parameters }
    }

    pub fn without_technique(mut self, name: &str) -> Self {
        self.techniques.retain(|(t, _)| t != name);
        self
    }

    pub fn without_parameter(mut self, name: &str) -> Self {
        self.parameters.retain(|(p, _)| p != name);
        self
    }
}

/// Values pushed into mock programs, readable after the program is gone
#[derive(Debug, Default)]
pub struct MockProgramState {
    pub matrices: FxHashMap<String, Mat4>,
    pub read_views: FxHashMap<String, ResourceId>,
}

pub struct MockShadingProgram {
    desc: MockProgramDesc,
    state: Arc<Mutex<MockProgramState>>,
    events: EventLog,
    failures: FailureSet,
}

impl MockShadingProgram {
    fn technique_name(&self, technique: TechniqueHandle) -> &str {
        self.desc
            .techniques
            .get(technique.0 as usize)
            .map(|(name, _)| name.as_str())
            .unwrap_or("?")
    }

    fn parameter_name(&self, parameter: ParameterHandle) -> String {
        self.desc
            .parameters
            .get(parameter.0 as usize)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }
}

impl ShadingProgram for MockShadingProgram {
    fn technique_by_name(&self, name: &str) -> Option<TechniqueHandle> {
        self.desc
            .techniques
            .iter()
            .position(|(t, _)| t == name)
            .map(|index| TechniqueHandle(index as u32))
    }

    fn pass_count(&self, technique: TechniqueHandle) -> u32 {
        self.desc
            .techniques
            .get(technique.0 as usize)
            .map(|(_, passes)| *passes)
            .unwrap_or(0)
    }

    fn pass_input_signature(&self, technique: TechniqueHandle, pass: u32) -> Result<InputSignature> {
        if pass >= self.pass_count(technique) {
            return Err(Error::InvalidResource(format!(
                "mock: pass {} out of range for {}",
                pass,
                self.technique_name(technique)
            )));
        }
        Ok(InputSignature(self.technique_name(technique).as_bytes().to_vec()))
    }

    fn parameter_by_name(&self, name: &str, kind: ParameterKind) -> Option<ParameterHandle> {
        self.desc
            .parameters
            .iter()
            .position(|(p, k)| p == name && *k == kind)
            .map(|index| ParameterHandle(index as u32))
    }

    fn set_matrix(&mut self, parameter: ParameterHandle, value: &Mat4) {
        let name = self.parameter_name(parameter);
        self.state.lock().unwrap().matrices.insert(name, *value);
    }

    fn set_read_view(&mut self, parameter: ParameterHandle, view: &dyn ReadView) {
        let name = self.parameter_name(parameter);
        self.state.lock().unwrap().read_views.insert(name, view.id());
    }

    fn apply_pass(
        &self,
        technique: TechniqueHandle,
        pass: u32,
        _context: &mut dyn GraphicsContext,
    ) -> Result<()> {
        if should_fail(&self.failures, "apply_pass", "") {
            return Err(injected("apply_pass"));
        }
        push(&self.events, format!("apply_pass:{}:{}", self.technique_name(technique), pass));
        Ok(())
    }
}

impl Drop for MockShadingProgram {
    fn drop(&mut self) {
        push(&self.events, "release program");
    }
}

// ============================================================================
// Mock GraphicsContext
// ============================================================================

pub struct MockGraphicsContext {
    events: EventLog,
    failures: FailureSet,
}

impl MockGraphicsContext {
    fn command(&self, name: &str, event: String) -> Result<()> {
        if should_fail(&self.failures, name, "") {
            return Err(injected(name));
        }
        push(&self.events, event);
        Ok(())
    }
}

impl GraphicsContext for MockGraphicsContext {
    fn set_render_targets(
        &mut self,
        _render_target: &dyn RenderTargetView,
        depth_stencil: Option<&dyn DepthStencilView>,
    ) -> Result<()> {
        let event = if depth_stencil.is_some() {
            "set_render_targets:color+depth"
        } else {
            "set_render_targets:color"
        };
        self.command("set_render_targets", event.to_string())
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        self.command(
            "set_viewport",
            format!("set_viewport:{}x{}", viewport.width, viewport.height),
        )
    }

    fn clear_render_target(&mut self, _target: &dyn RenderTargetView, color: [f32; 4]) -> Result<()> {
        self.command("clear_render_target", format!("clear_render_target:{:?}", color))
    }

    fn clear_depth_stencil(&mut self, _target: &dyn DepthStencilView, depth: f32, stencil: u8) -> Result<()> {
        self.command("clear_depth_stencil", format!("clear_depth_stencil:{}:{}", depth, stencil))
    }

    fn set_primitive_topology(&mut self, topology: PrimitiveTopology) -> Result<()> {
        self.command("set_primitive_topology", format!("set_primitive_topology:{:?}", topology))
    }

    fn set_input_layout(&mut self, _layout: &dyn InputLayout) -> Result<()> {
        self.command("set_input_layout", "set_input_layout".to_string())
    }

    fn set_vertex_buffer(&mut self, _buffer: &dyn Buffer, stride: u32, offset: u32) -> Result<()> {
        self.command("set_vertex_buffer", format!("set_vertex_buffer:{}:{}", stride, offset))
    }

    fn set_index_buffer(&mut self, _buffer: &dyn Buffer, index_type: IndexType, _offset: u32) -> Result<()> {
        self.command("set_index_buffer", format!("set_index_buffer:{:?}", index_type))
    }

    fn draw_indexed(&mut self, index_count: u32, _first_index: u32, _base_vertex: i32) -> Result<()> {
        self.command("draw_indexed", format!("draw_indexed:{}", index_count))
    }

    fn clear_state(&mut self) {
        push(&self.events, "clear_state");
    }

    fn flush(&mut self) -> Result<()> {
        self.command("flush", "flush".to_string())
    }
}

impl Drop for MockGraphicsContext {
    fn drop(&mut self) {
        push(&self.events, "release context");
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock device that records resources without a GPU
pub struct MockGraphicsDevice {
    events: EventLog,
    failures: FailureSet,
    program_desc: MockProgramDesc,
    program_state: Arc<Mutex<MockProgramState>>,
    next_id: AtomicU64,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::with_program_desc(MockProgramDesc::standard())
    }

    /// Mock whose compiled programs expose `desc`
    pub fn with_program_desc(desc: MockProgramDesc) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(FxHashSet::default())),
            program_desc: desc,
            program_state: Arc::new(Mutex::new(MockProgramState::default())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Immediate context sharing this device's event log and failures
    pub fn create_context(&self) -> MockGraphicsContext {
        MockGraphicsContext {
            events: self.events.clone(),
            failures: self.failures.clone(),
        }
    }

    /// Make an operation fail.
    ///
    /// `key` is either an operation name (`"create_buffer"`) or an operation
    /// followed by a resource label (`"create_buffer index_buffer"`).
    pub fn fail_on(&self, key: &str) {
        self.failures.lock().unwrap().insert(key.to_string());
    }

    /// Handle on the event log, still readable after the device is dropped
    pub fn event_log(&self) -> EventLog {
        self.events.clone()
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Values pushed into every program this device compiled
    pub fn program_state(&self) -> Arc<Mutex<MockProgramState>> {
        self.program_state.clone()
    }

    fn next_id(&self) -> ResourceId {
        ResourceId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn check(&self, operation: &str, label: &str) -> Result<()> {
        if should_fail(&self.failures, operation, label) {
            return Err(injected(operation));
        }
        if label.is_empty() {
            push(&self.events, operation);
        } else {
            push(&self.events, format!("{} {}", operation, label));
        }
        Ok(())
    }
}

impl Default for MockGraphicsDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(&self, desc: &BufferDesc, data: &[u8]) -> Result<Box<dyn Buffer>> {
        if data.is_empty() {
            return Err(Error::InvalidResource(format!("mock: empty buffer {}", desc.label)));
        }
        self.check("create_buffer", &desc.label)?;
        Ok(Box::new(MockBuffer {
            label: desc.label.clone(),
            size: data.len() as u64,
            usage: desc.usage,
            events: self.events.clone(),
        }))
    }

    fn create_image(&self, desc: &ImageDesc, data: Option<&[u8]>) -> Result<Box<dyn Image>> {
        if let Some(bytes) = data {
            if bytes.len() != desc.data_size() {
                return Err(Error::InvalidResource(format!(
                    "mock: image {} expects {} bytes, got {}",
                    desc.label,
                    desc.data_size(),
                    bytes.len()
                )));
            }
        }
        self.check("create_image", &desc.label)?;
        Ok(Box::new(MockImage {
            desc: desc.clone(),
            uploaded_bytes: data.map_or(0, |bytes| bytes.len()),
            events: self.events.clone(),
        }))
    }

    fn create_read_view(&self, image: &dyn Image) -> Result<Box<dyn ReadView>> {
        let desc = image.desc();
        if desc.usage != ImageUsage::Sampled {
            return Err(Error::InvalidResource(format!(
                "mock: read-view over non-sampled image {}",
                desc.label
            )));
        }
        self.check("create_read_view", &desc.label)?;
        Ok(Box::new(MockReadView {
            id: self.next_id(),
            label: format!("{}.view", desc.label),
            events: self.events.clone(),
        }))
    }

    fn create_input_layout(
        &self,
        layout: &VertexLayout,
        signature: &InputSignature,
    ) -> Result<Box<dyn InputLayout>> {
        if signature.0.is_empty() || !layout.is_valid() {
            return Err(Error::InvalidResource("mock: layout does not match signature".to_string()));
        }
        self.check("create_input_layout", "")?;
        Ok(Box::new(MockInputLayout {
            layout: layout.clone(),
            events: self.events.clone(),
        }))
    }

    fn create_shading_program(&self, path: &Path) -> Result<Box<dyn ShadingProgram>> {
        self.check("create_shading_program", &path.display().to_string())?;
        Ok(Box::new(MockShadingProgram {
            desc: self.program_desc.clone(),
            state: self.program_state.clone(),
            events: self.events.clone(),
            failures: self.failures.clone(),
        }))
    }

    fn create_swapchain(&self, desc: &SwapchainDesc) -> Result<Box<dyn Swapchain>> {
        self.check("create_swapchain", "")?;
        Ok(Box::new(MockSwapchain {
            desc: desc.clone(),
            events: self.events.clone(),
            failures: self.failures.clone(),
        }))
    }

    fn create_render_target_view(&self, image: &dyn Image) -> Result<Box<dyn RenderTargetView>> {
        self.check("create_render_target_view", &image.desc().label)?;
        Ok(Box::new(MockRenderTargetView { events: self.events.clone() }))
    }

    fn create_depth_stencil_view(&self, image: &dyn Image) -> Result<Box<dyn DepthStencilView>> {
        if !image.desc().format.is_depth() {
            return Err(Error::InvalidResource(format!(
                "mock: depth-stencil view over color image {}",
                image.desc().label
            )));
        }
        self.check("create_depth_stencil_view", &image.desc().label)?;
        Ok(Box::new(MockDepthStencilView { events: self.events.clone() }))
    }
}

impl Drop for MockGraphicsDevice {
    fn drop(&mut self) {
        push(&self.events, "release device");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
