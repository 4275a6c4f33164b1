use ego_tree::{NodeId, NodeRef};
use scraper::node::Node;
use scraper::{Html, Selector};
use std::collections::HashMap;

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// 暫存在單一元素上的修改，序列化時套用
#[derive(Debug, Default)]
struct ElementEdits {
    merge_style: Option<String>,
    prepend: Vec<String>,
    append: Vec<String>,
}

/// 頁面文件：解析一次，暫存各錨點的修改，最後重新序列化。
/// 選擇器沒命中任何元素時所有操作都是 no-op。
pub struct PageDocument {
    doc: Html,
    edits: HashMap<NodeId, ElementEdits>,
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
            edits: HashMap::new(),
        }
    }

    /// 選擇器命中的元素數
    pub fn count(&self, selector: &str) -> usize {
        self.match_ids(selector).len()
    }

    pub fn has(&self, selector: &str) -> bool {
        !self.match_ids(selector).is_empty()
    }

    /// 把樣式宣告合併進第一個命中元素的 style 屬性
    pub fn merge_style(&mut self, selector: &str, declarations: &str) -> bool {
        match self.match_ids(selector).into_iter().next() {
            Some(id) => {
                let edits = self.edits.entry(id).or_default();
                edits.merge_style = Some(match edits.merge_style.take() {
                    Some(existing) => format!("{}; {}", existing, declarations),
                    None => declarations.to_string(),
                });
                true
            }
            None => false,
        }
    }

    /// 在第 index 個命中元素的第一個子節點位置插入片段。
    /// 片段原樣輸出，插值內容須由呼叫端先跳脫。
    pub fn prepend_html(&mut self, selector: &str, index: usize, fragment: &str) -> bool {
        match self.match_ids(selector).get(index).copied() {
            Some(id) => {
                self.edits
                    .entry(id)
                    .or_default()
                    .prepend
                    .push(fragment.to_string());
                true
            }
            None => false,
        }
    }

    /// 在第一個命中元素的結尾追加片段；重複追加保持順序
    pub fn append_html(&mut self, selector: &str, fragment: &str) -> bool {
        match self.match_ids(selector).into_iter().next() {
            Some(id) => {
                self.edits
                    .entry(id)
                    .or_default()
                    .append
                    .push(fragment.to_string());
                true
            }
            None => false,
        }
    }

    /// 重新序列化整份文件並套用暫存的修改
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_node(self.doc.tree.root(), &mut out);
        out
    }

    fn match_ids(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(parsed) => self.doc.select(&parsed).map(|element| element.id()).collect(),
            Err(e) => {
                tracing::debug!("🔶 Invalid selector '{}': {}", selector, e);
                Vec::new()
            }
        }
    }

    fn write_node(&self, node: NodeRef<'_, Node>, out: &mut String) {
        match node.value() {
            Node::Document | Node::Fragment => {
                for child in node.children() {
                    self.write_node(child, out);
                }
            }
            Node::Doctype(doctype) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(&doctype.name());
                out.push('>');
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Text(text) => {
                let raw = node
                    .parent()
                    .and_then(|parent| {
                        parent
                            .value()
                            .as_element()
                            .map(|element| RAW_TEXT_ELEMENTS.contains(&element.name()))
                    })
                    .unwrap_or(false);
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            Node::Element(element) => {
                let edits = self.edits.get(&node.id());

                out.push('<');
                out.push_str(element.name());

                let mut style_written = false;
                for (name, value) in element.attrs() {
                    if name == "style" {
                        if let Some(extra) = edits.and_then(|e| e.merge_style.as_deref()) {
                            push_attr(out, name, &merge_declarations(value, extra));
                            style_written = true;
                            continue;
                        }
                    }
                    push_attr(out, name, value);
                }
                if !style_written {
                    if let Some(extra) = edits.and_then(|e| e.merge_style.as_deref()) {
                        push_attr(out, "style", extra);
                    }
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&element.name()) {
                    return;
                }

                if let Some(edits) = edits {
                    for fragment in &edits.prepend {
                        out.push_str(fragment);
                    }
                }
                for child in node.children() {
                    self.write_node(child, out);
                }
                if let Some(edits) = edits {
                    for fragment in &edits.append {
                        out.push_str(fragment);
                    }
                }

                out.push_str("</");
                out.push_str(element.name());
                out.push('>');
            }
            Node::ProcessingInstruction(_) => {}
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

fn merge_declarations(existing: &str, extra: &str) -> String {
    let trimmed = existing.trim().trim_end_matches(';');
    if trimmed.is_empty() {
        extra.to_string()
    } else {
        format!("{}; {}", trimmed, extra)
    }
}

pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
