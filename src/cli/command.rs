use std::path::PathBuf;

pub enum Command {
    /// Emit the full sequence; stdout when `output` is `None`.
    Generate {
        output: Option<PathBuf>,
    },
    /// Print a single definition.
    Definition {
        index: u32,
    },
    Header,
    // Effective configuration after layering
    ShowConfig,
}
