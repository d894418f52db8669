use crate::block::TextBlock;
use crate::inline::parse_inline;
use crate::line::{Line, classify};

/// Which block is currently accumulating lines.
#[derive(Debug, Default)]
enum State {
    #[default]
    None,
    Paragraph(Vec<String>),
    BulletList(Vec<String>),
    NumberedList(Vec<String>),
}

/// Accumulates blocks as lines are fed through the state machine.
#[derive(Debug, Default)]
struct Renderer {
    state: State,
    blocks: Vec<TextBlock>,
}

impl Renderer {
    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Bullet(item) => {
                if let State::BulletList(items) = &mut self.state {
                    items.push(item.to_string());
                } else {
                    self.flush();
                    self.state = State::BulletList(vec![item.to_string()]);
                }
            }
            Line::Numbered(item) => {
                if let State::NumberedList(items) = &mut self.state {
                    items.push(item.to_string());
                } else {
                    self.flush();
                    self.state = State::NumberedList(vec![item.to_string()]);
                }
            }
            Line::Blank => self.flush(),
            Line::Plain(text) => {
                if let State::Paragraph(lines) = &mut self.state {
                    lines.push(text.to_string());
                } else {
                    self.flush();
                    self.state = State::Paragraph(vec![text.to_string()]);
                }
            }
        }
    }

    /// Emit the open block, if any, and return to `None`.
    fn flush(&mut self) {
        let block = match std::mem::take(&mut self.state) {
            State::None => return,
            State::Paragraph(lines) => TextBlock::Paragraph {
                runs: parse_inline(&lines.join(" ")),
            },
            State::BulletList(items) => TextBlock::BulletList {
                items: items.iter().map(|i| parse_inline(i)).collect(),
            },
            State::NumberedList(items) => TextBlock::NumberedList {
                items: items.iter().map(|i| parse_inline(i)).collect(),
            },
        };
        self.blocks.push(block);
    }

    fn finish(mut self) -> Vec<TextBlock> {
        self.flush();
        self.blocks
    }
}

/// Render a chatbot reply into blocks.
pub fn render(text: &str) -> Vec<TextBlock> {
    let mut renderer = Renderer::default();
    for raw in text.split('\n') {
        renderer.feed(classify(raw));
    }
    let blocks = renderer.finish();
    tracing::trace!(bytes = text.len(), blocks = blocks.len(), "rendered reply");
    blocks
}
