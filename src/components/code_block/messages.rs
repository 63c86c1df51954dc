pub enum Msg {
    FileLoaded { request_id: u64, text: String },
    FileFailed { request_id: u64, message: String },
    CopyRequested,
    CopySucceeded,
    CopyFailed,
    CopyFeedbackElapsed,
}
