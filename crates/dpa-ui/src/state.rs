//! UI状态管理

use tracing::debug;

/// 主窗口的标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    CadViewer,
    FeatureComparison,
    ImageComparison,
    BestMatch,
    DiePrediction,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::CadViewer,
        Tab::FeatureComparison,
        Tab::ImageComparison,
        Tab::BestMatch,
        Tab::DiePrediction,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::CadViewer => "CAD Viewer",
            Tab::FeatureComparison => "Feature Comparison",
            Tab::ImageComparison => "Image Comparison",
            Tab::BestMatch => "Best Match",
            Tab::DiePrediction => "Die Prediction",
        }
    }
}

/// 可选的铝合金牌号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alloy {
    A6060,
    A6063,
    A6082,
}

impl Alloy {
    pub const ALL: [Alloy; 3] = [Alloy::A6060, Alloy::A6063, Alloy::A6082];

    pub fn label(&self) -> &'static str {
        match self {
            Alloy::A6060 => "6060",
            Alloy::A6063 => "6063",
            Alloy::A6082 => "6082",
        }
    }
}

/// 由UI发出、宿主处理的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    UploadDxf,
    CorrectDxf,
    GenerateProfile,
    ProcessProfile,
    ExportPdf,
    FindSimilarProfiles,
    FindSimilarImages,
    FindBestMatch,
    PredictPerformance,
    ZoomIn,
    ZoomOut,
    ZoomFit,
    OpenDetailView,
}

/// 模态消息框内容
#[derive(Debug, Clone)]
pub struct ModalMessage {
    pub title: String,
    pub text: String,
}

/// UI状态
#[derive(Debug, Clone)]
pub struct UiState {
    pub active_tab: Tab,
    pub dark_mode: bool,
    pub alloy: Alloy,
    pub status_message: String,
    pub pending_command: Option<Command>,
    pub modal: Option<ModalMessage>,
    pub show_detail_view: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tab: Tab::CadViewer,
            dark_mode: false,
            alloy: Alloy::A6063,
            status_message: "Ready".to_string(),
            pending_command: None,
            modal: None,
            show_detail_view: false,
        }
    }
}

impl UiState {
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// 记录一条待处理命令（后到的覆盖先到的）
    pub fn request(&mut self, command: Command) {
        if let Some(previous) = self.pending_command.replace(command) {
            debug!("Command {:?} superseded by {:?}", previous, command);
        }
    }

    pub fn take_command(&mut self) -> Option<Command> {
        self.pending_command.take()
    }

    pub fn show_modal(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.modal = Some(ModalMessage {
            title: title.into(),
            text: text.into(),
        });
    }
}
