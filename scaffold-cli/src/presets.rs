use scaffold_server::ServiceDefaults;

/// The server flavours shipped with the scaffolds. They differ only in the
/// defaults they hand to [`ServiceConfig`](scaffold_server::ServiceConfig).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    #[default]
    A2a,
    Mcp,
    A2aMcp,
}

impl Preset {
    pub fn app_name(self) -> &'static str {
        match self {
            Self::A2a => "vite-adk-a2a-server",
            Self::Mcp => "vite-adk-mcp-server",
            Self::A2aMcp => "vite-adk-a2a-mcp-server",
        }
    }

    pub fn port(self) -> u16 {
        match self {
            Self::A2a => 8000,
            Self::Mcp => 8001,
            Self::A2aMcp => 8002,
        }
    }

    pub fn defaults(self) -> ServiceDefaults {
        ServiceDefaults::new(self.app_name(), self.port())
    }
}
