use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::domain::rendering::{
    entities::{Inline, MarkupBlock},
    ports::MarkupRenderer,
};

/// CommonMark converter backed by `pulldown-cmark`. Parser events are folded
/// into [`MarkupBlock`]s; HTML is kept as plain text, links keep their label.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightweightMarkup;

impl MarkupRenderer for LightweightMarkup {
    fn render(&self, text: &str) -> Vec<MarkupBlock> {
        let mut converter = Converter::default();
        for event in Parser::new_ext(text, Options::ENABLE_TASKLISTS) {
            converter.handle(event);
        }
        converter.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Strong,
    Emphasis,
}

enum Container {
    List {
        ordered: bool,
        items: Vec<Vec<MarkupBlock>>,
    },
    Item(Vec<MarkupBlock>),
}

#[derive(Default)]
struct Converter {
    blocks: Vec<MarkupBlock>,
    containers: Vec<Container>,
    inlines: Vec<Inline>,
    spans: Vec<Span>,
    heading: Option<u8>,
    code_block: Option<String>,
}

impl Converter {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => match self.code_block.as_mut() {
                Some(code) => code.push_str(&text),
                None => self.push_text(&text),
            },
            Event::Code(code) => self.inlines.push(Inline::Code(code.into_string())),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(html.trim_end()),
            Event::TaskListMarker(done) => self.push_text(if done { "[x] " } else { "[ ] " }),
            Event::Rule => {
                self.flush_inlines();
                self.push_block(MarkupBlock::Rule);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.flush_inlines(),
            Tag::Heading { level, .. } => {
                self.flush_inlines();
                self.heading = Some(level as u8);
            }
            Tag::List(start) => {
                // Text of a tight item comes before its nested list.
                self.flush_inlines();
                self.containers.push(Container::List {
                    ordered: start.is_some(),
                    items: Vec::new(),
                });
            }
            Tag::Item => self.containers.push(Container::Item(Vec::new())),
            Tag::CodeBlock(_) => {
                self.flush_inlines();
                self.code_block = Some(String::new());
            }
            Tag::Strong => self.spans.push(Span::Strong),
            Tag::Emphasis => self.spans.push(Span::Emphasis),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::HtmlBlock => self.flush_inlines(),
            TagEnd::Heading(_) => {
                let content = std::mem::take(&mut self.inlines);
                if let Some(level) = self.heading.take()
                    && !content.is_empty()
                {
                    self.push_block(MarkupBlock::Heading { level, content });
                }
            }
            TagEnd::Item => {
                self.flush_inlines();
                if let Some(Container::Item(blocks)) = self.containers.pop()
                    && let Some(Container::List { items, .. }) = self.containers.last_mut()
                {
                    items.push(blocks);
                }
            }
            TagEnd::List(_) => {
                self.flush_inlines();
                if let Some(Container::List { ordered, items }) = self.containers.pop() {
                    self.push_block(MarkupBlock::List { ordered, items });
                }
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.code_block.take() {
                    self.push_block(MarkupBlock::CodeBlock(
                        code.trim_end_matches('\n').to_string(),
                    ));
                }
            }
            TagEnd::Strong | TagEnd::Emphasis => {
                self.spans.pop();
            }
            _ => {}
        }
    }

    /// Adds text in the innermost open span, merging with the previous run
    /// when both have the same style.
    fn push_text(&mut self, text: &str) {
        let span = self.spans.last().copied();
        match (self.inlines.last_mut(), span) {
            (Some(Inline::Text(previous)), None)
            | (Some(Inline::Strong(previous)), Some(Span::Strong))
            | (Some(Inline::Emphasis(previous)), Some(Span::Emphasis)) => {
                previous.push_str(text)
            }
            _ => self.inlines.push(match span {
                None => Inline::Text(text.to_string()),
                Some(Span::Strong) => Inline::Strong(text.to_string()),
                Some(Span::Emphasis) => Inline::Emphasis(text.to_string()),
            }),
        }
    }

    fn flush_inlines(&mut self) {
        if self.inlines.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.inlines);
        self.push_block(MarkupBlock::Paragraph(content));
    }

    fn push_block(&mut self, block: MarkupBlock) {
        match self.containers.last_mut() {
            Some(Container::Item(blocks)) => blocks.push(block),
            _ => self.blocks.push(block),
        }
    }

    fn finish(mut self) -> Vec<MarkupBlock> {
        self.flush_inlines();
        self.blocks
    }
}
