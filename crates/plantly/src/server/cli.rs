#[derive(Debug, Clone, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PLANTLY_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "PLANTLY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Origin allowed to call the API (repeat or comma separate for several)
    #[arg(
        long = "allowed-origin",
        env = "PLANTLY_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Answer failures with a matching HTTP status instead of 200
    #[arg(long, env = "PLANTLY_STRICT_STATUS")]
    pub strict_status: bool,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "PLANTLY_MAX_UPLOAD_BYTES", default_value = "20971520")]
    pub max_upload_bytes: usize,
}
