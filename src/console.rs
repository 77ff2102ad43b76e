//! Console orchestration: the three content workflows, the brand-upload
//! screen, the active-view selector, and the promote bridge.

use tracing::info;

use crate::clients::CopyGateway;
use crate::core::models::{
    ActiveView, BrainstormRequest, BrainstormResult, BrandDocumentInput, CopyRequest, CopyResult,
    IngestReceipt, VisionAnalysis, VisionInput,
};
use crate::workflow::WorkflowSlice;
use crate::workflow::bridge::{brainstorm_seed, vision_seed};

/// Fixed user-facing failure messages, one per workflow. Raw gateway
/// errors never reach the display layer.
pub const WRITE_FALLBACK: &str = "生成失敗，請檢查後端伺服器是否啟動。";
pub const VISION_FALLBACK: &str = "圖片分析失敗。";
pub const BRAINSTORM_FALLBACK: &str = "討論失敗，請稍後再試。";
pub const BRAND_FALLBACK: &str = "上傳失敗，請檢查後端伺服器。";

/// Session-scoped console state. Each slice is owned exclusively by its
/// workflow; the bridge only reads a source slice's result and writes
/// the write slice's topic plus the view selector. Nothing here
/// survives the process.
#[derive(Default)]
pub struct Console {
    pub write: WorkflowSlice<CopyRequest, CopyResult>,
    pub vision: WorkflowSlice<VisionInput, VisionAnalysis>,
    pub brainstorm: WorkflowSlice<BrainstormRequest, BrainstormResult>,
    pub brand: WorkflowSlice<BrandDocumentInput, IngestReceipt>,
    pub active_view: ActiveView,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional view switch. Has zero effect on any slice.
    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Submit the write workflow. No-op while the topic is empty.
    pub async fn submit_write(&mut self, gateway: &dyn CopyGateway) {
        let Some(req) = self.write.begin_submit() else {
            return;
        };
        let outcome = gateway.generate_copy(&req).await;
        self.write.finish_submit(outcome, WRITE_FALLBACK);
    }

    /// Submit the vision workflow. No-op until an image is selected.
    pub async fn submit_vision(&mut self, gateway: &dyn CopyGateway) {
        let Some(input) = self.vision.begin_submit() else {
            return;
        };
        // the guard requires an image, so this only trips on a logic bug
        let Some(image) = input.image else {
            self.vision.busy = false;
            return;
        };
        let outcome = gateway.analyze_image(&image).await;
        self.vision.finish_submit(outcome, VISION_FALLBACK);
    }

    /// Submit the brainstorm workflow. No-op while the idea is empty.
    /// The platform picker lives on the write tab and is shared.
    pub async fn submit_brainstorm(&mut self, gateway: &dyn CopyGateway) {
        self.brainstorm.input.platform = self.write.input.platform;
        let Some(req) = self.brainstorm.begin_submit() else {
            return;
        };
        let outcome = gateway.brainstorm(&req).await;
        self.brainstorm.finish_submit(outcome, BRAINSTORM_FALLBACK);
    }

    /// Upload a brand-knowledge document. On success the picked file is
    /// cleared so the same document is not re-sent by accident.
    pub async fn submit_brand_upload(&mut self, gateway: &dyn CopyGateway) {
        let Some(input) = self.brand.begin_submit() else {
            return;
        };
        let Some(doc) = input.document else {
            self.brand.busy = false;
            return;
        };
        let outcome = gateway.ingest_brand_document(&doc).await;
        self.brand.finish_submit(outcome, BRAND_FALLBACK);
        if self.brand.result.is_some() {
            self.brand.input.document = None;
        }
    }

    /// Seed the write topic from a completed vision analysis and bring
    /// the write view into focus. No-op without a vision result. The
    /// current topic is overwritten, not appended to, and the vision
    /// slice itself is left untouched.
    pub fn promote_vision_to_write(&mut self) {
        let Some(result) = &self.vision.result else {
            return;
        };
        self.write.input.topic = vision_seed(&result.analysis);
        self.active_view = ActiveView::Write;
        info!("Promoted vision analysis into the write topic");
    }

    /// Seed the write topic from completed brainstorm suggestions and
    /// bring the write view into focus. Same contract as
    /// [`Self::promote_vision_to_write`].
    pub fn promote_brainstorm_to_write(&mut self) {
        let Some(result) = &self.brainstorm.result else {
            return;
        };
        self.write.input.topic = brainstorm_seed(&result.suggestions);
        self.active_view = ActiveView::Write;
        info!("Promoted brainstorm suggestions into the write topic");
    }
}
