//! Rich text as stored by the content backend: a flat list of blocks, each
//! holding styled spans. Lists are encoded as consecutive blocks that share
//! a `listItem` kind.

use serde::Deserialize;
use yew::prelude::*;

use crate::cms::models::null_as_default;

#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type")]
    pub kind: String,
    pub style: Option<String>,
    pub list_item: Option<String>,
    pub children: Option<Vec<Span>>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: Vec<String>,
}

impl Block {
    fn is_text(&self) -> bool {
        self.kind == "block" && self.children.is_some()
    }
}

/// Cuts rich text down to at most `word_limit` words.
///
/// Non-text blocks are kept as they are and do not count towards the limit.
/// The span that crosses the limit keeps its leading words followed by `...`.
/// Words are counted per span with [`span_words`], so leading or trailing
/// whitespace counts as an empty word.
pub fn truncate_blocks(blocks: &[Block], word_limit: usize) -> Vec<Block> {
    let mut word_count = 0;
    let mut truncated = Vec::new();

    for block in blocks {
        if word_count >= word_limit {
            break;
        }
        let children = match (&block.children, block.is_text()) {
            (Some(children), true) => children,
            _ => {
                truncated.push(block.clone());
                continue;
            }
        };

        let mut kept = Vec::new();
        for span in children {
            if word_count >= word_limit {
                break;
            }
            let words = span_words(&span.text);
            let remaining = word_limit - word_count;
            if words.len() <= remaining {
                kept.push(span.clone());
                word_count += words.len();
            } else {
                kept.push(Span {
                    text: format!("{}...", words[..remaining].join(" ")),
                    marks: span.marks.clone(),
                });
                word_count = word_limit;
            }
        }

        if !kept.is_empty() {
            truncated.push(Block {
                children: Some(kept),
                ..block.clone()
            });
        }
    }
    truncated
}

/// Splits span text on runs of whitespace. Unlike `split_whitespace`, a leading
/// or trailing run yields an empty word and empty text is one empty word.
pub fn span_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut in_gap = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if !in_gap {
                words.push(&text[start..i]);
                in_gap = true;
            }
        } else if in_gap {
            start = i;
            in_gap = false;
        }
    }
    words.push(if in_gap { "" } else { &text[start..] });
    words
}

/// Plain text of all spans, blocks separated by blank lines.
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(|block| block.children.as_ref())
        .map(|spans| spans.iter().map(|s| s.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n\n")
}

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, never below one.
pub fn reading_minutes(blocks: &[Block]) -> usize {
    let words = plain_text(blocks).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

#[derive(Properties, PartialEq)]
pub struct PortableTextProps {
    pub blocks: Vec<Block>,
}

#[function_component(PortableText)]
pub fn portable_text(props: &PortableTextProps) -> Html {
    let mut rendered = Vec::new();
    let mut list: Option<(String, Vec<Html>)> = None;

    for block in props.blocks.iter().filter(|b| b.is_text()) {
        let item = html! { <li>{ render_spans(block) }</li> };
        if let (Some(kind), Some((open_kind, items))) = (&block.list_item, list.as_mut()) {
            if kind == open_kind {
                items.push(item);
                continue;
            }
        }
        if let Some(finished) = list.take() {
            rendered.push(render_list(finished));
        }
        match &block.list_item {
            Some(kind) => list = Some((kind.clone(), vec![item])),
            None => rendered.push(render_block(block)),
        }
    }
    if let Some(finished) = list.take() {
        rendered.push(render_list(finished));
    }

    html! { <>{ for rendered }</> }
}

fn render_list((kind, items): (String, Vec<Html>)) -> Html {
    if kind == "number" {
        html! { <ol>{ for items }</ol> }
    } else {
        html! { <ul>{ for items }</ul> }
    }
}

fn render_block(block: &Block) -> Html {
    let content = render_spans(block);
    match block.style.as_deref().unwrap_or("normal") {
        "h1" => html! { <h1>{ content }</h1> },
        "h2" => html! { <h2>{ content }</h2> },
        "h3" => html! { <h3>{ content }</h3> },
        "h4" => html! { <h4>{ content }</h4> },
        "blockquote" => html! { <blockquote>{ content }</blockquote> },
        _ => html! { <p>{ content }</p> },
    }
}

fn render_spans(block: &Block) -> Html {
    let spans = block.children.as_deref().unwrap_or_default();
    html! {
        <>
            { for spans.iter().map(render_span) }
        </>
    }
}

fn render_span(span: &Span) -> Html {
    let mut node = html! { <>{ span.text.clone() }</> };
    for mark in &span.marks {
        node = match mark.as_str() {
            "strong" => html! { <strong>{ node }</strong> },
            "em" => html! { <em>{ node }</em> },
            "code" => html! { <code>{ node }</code> },
            "underline" => html! { <u>{ node }</u> },
            _ => node,
        };
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blocks(value: serde_json::Value) -> Vec<Block> {
        serde_json::from_value(value).unwrap()
    }

    fn texts(blocks: &[Block]) -> Vec<Vec<String>> {
        blocks
            .iter()
            .map(|b| {
                b.children
                    .iter()
                    .flatten()
                    .map(|s| s.text.clone())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn short_text_is_left_alone() {
        let input = blocks(json!([
            { "_type": "block", "children": [{ "text": "three little words" }] }
        ]));
        assert_eq!(truncate_blocks(&input, 50), input);
    }

    #[test]
    fn cuts_the_crossing_span_and_stops() {
        let input = blocks(json!([
            { "_type": "block", "style": "normal", "children": [
                { "text": "one two" },
                { "text": "three four five", "marks": ["strong"] }
            ]},
            { "_type": "block", "children": [{ "text": "six seven" }] }
        ]));

        let out = truncate_blocks(&input, 3);

        assert_eq!(texts(&out), vec![vec!["one two".to_string(), "three...".to_string()]]);
        let cut = &out[0].children.as_ref().unwrap()[1];
        assert_eq!(cut.marks, vec!["strong".to_string()]);
        assert_eq!(out[0].style.as_deref(), Some("normal"));
    }

    #[test]
    fn non_text_blocks_pass_through_without_counting() {
        let input = blocks(json!([
            { "_type": "image" },
            { "_type": "block", "children": [{ "text": "a b" }] },
            { "_type": "block", "children": [{ "text": "c d" }] }
        ]));

        let out = truncate_blocks(&input, 2);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, "image");
        assert_eq!(texts(&out)[1], vec!["a b".to_string()]);
    }

    #[test]
    fn plain_text_joins_blocks() {
        let input = blocks(json!([
            { "_type": "block", "children": [{ "text": "Hello " }, { "text": "world" }] },
            { "_type": "image" },
            { "_type": "block", "children": [{ "text": "Bye" }] }
        ]));
        assert_eq!(plain_text(&input), "Hello world\n\nBye");
    }

    #[test]
    fn reading_time_rounds_up() {
        let long = "word ".repeat(401);
        let input = blocks(json!([{ "_type": "block", "children": [{ "text": long }] }]));
        assert_eq!(reading_minutes(&input), 3);
        assert_eq!(reading_minutes(&[]), 1);
    }

    #[test]
    fn edge_whitespace_counts_as_a_word() {
        assert_eq!(span_words(" hello"), vec!["", "hello"]);
        assert_eq!(span_words(""), vec![""]);
        assert_eq!(span_words("a  b\t"), vec!["a", "b", ""]);

        let input = blocks(json!([
            { "_type": "block", "children": [
                { "text": " one two" },
                { "text": "three" }
            ]}
        ]));
        let out = truncate_blocks(&input, 2);
        assert_eq!(texts(&out), vec![vec![" one...".to_string()]]);
    }
}
