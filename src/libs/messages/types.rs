#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String),
    ConfigDeleted,
    PromptTimeFormat,
    PromptCustomTemplate,
    PromptStrictMode,

    // === TALLY MESSAGES ===
    TallyHeader(String, String),
    EmptyDocumentHint,
    FormattingErrorCount(usize),
    OtherErrorCount(usize),
    ErrorDetailsHint,
    NoErrorsFound,
    MalformedCueRange(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === GENERIC MESSAGES ===
    UnknownFormatPreset(String),
}
