use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use eyre::{Result, WrapErr};

use mindcare_render::plain::to_plain_text;

#[derive(Debug, clap::Args)]
pub struct Render {
    /// File holding the reply; stdin when omitted
    file: Option<PathBuf>,

    /// Print the block sequence as JSON
    #[arg(long)]
    json: bool,
}

impl Render {
    pub fn run(self) -> Result<()> {
        let text = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let blocks = mindcare_render::render(&text);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        } else {
            println!("{}", plain(&blocks));
        }
        Ok(())
    }
}

/// Plain-text rendering, with ANSI bold when stdout is a terminal.
pub fn plain(blocks: &[mindcare_render::TextBlock]) -> String {
    if std::io::stdout().is_terminal() {
        to_plain_text(blocks, "\x1b[1m", "\x1b[0m")
    } else {
        to_plain_text(blocks, "", "")
    }
}
