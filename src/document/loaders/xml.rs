use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;
use serde_json::{Map, Value};

use crate::document::DocumentObject;

/// Key under which element text is stored when the element also has
/// attributes or children.
const CONTENT_KEY: &str = "content";

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$").expect("Invalid Regex")
});

static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|[A-Za-z_][A-Za-z0-9._-]*);").expect("Invalid Regex")
});

/// Parses XML text into the equivalent nested JSON object.
pub fn parse_xml_document(text: &str) -> anyhow::Result<DocumentObject> {
    let map = xml_to_json(text)?;
    log::debug!("Converted XML document with {} top-level elements", map.len());
    Ok(DocumentObject::from(map))
}

/// Converts XML into a JSON object keyed by the root element's tag.
///
/// Repeated sibling tags become arrays, attributes become keys and text
/// becomes either the element's value or a `content` key.
pub fn xml_to_json(text: &str) -> anyhow::Result<Map<String, Value>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut root = Map::new();
    let mut stack: Vec<OpenElement> = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(OpenElement::from_start(&start)?),
            Event::Empty(start) => {
                let element = OpenElement::from_start(&start)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                let element = stack.pop()
                    .ok_or_else(|| anyhow::anyhow!("Closing tag without matching opening tag"))?;
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let value = coerce_scalar(&unescape(std::str::from_utf8(&text)?));
                add_content(&mut stack, value);
            }
            Event::CData(cdata) => {
                let value = String::from_utf8(cdata.into_inner().into_owned())?;
                add_content(&mut stack, Value::String(value));
            }
            Event::Eof => break,
            // Comments, declarations, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(element) = stack.last() {
        return Err(anyhow::anyhow!("Unclosed element <{}>", element.name));
    }
    Ok(root)
}

struct OpenElement {
    name: String,
    fields: Map<String, Value>,
}

impl OpenElement {
    fn from_start(start: &BytesStart) -> anyhow::Result<Self> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_string();
        let mut fields = Map::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
            let value = coerce_scalar(&unescape(std::str::from_utf8(&attribute.value)?));
            accumulate(&mut fields, key, value);
        }
        Ok(Self { name, fields })
    }

    fn into_value(mut self) -> Value {
        if self.fields.is_empty() {
            return Value::String(String::new());
        }
        if self.fields.len() == 1 {
            if let Some(content) = self.fields.remove(CONTENT_KEY) {
                return content;
            }
        }
        Value::Object(self.fields)
    }
}

fn close_element(element: OpenElement, stack: &mut [OpenElement], root: &mut Map<String, Value>) {
    let parent = match stack.last_mut() {
        Some(parent) => &mut parent.fields,
        None => root,
    };
    let name = element.name.clone();
    accumulate(parent, name, element.into_value());
}

fn add_content(stack: &mut [OpenElement], value: Value) {
    match stack.last_mut() {
        Some(element) => accumulate(&mut element.fields, CONTENT_KEY.to_string(), value),
        None => log::warn!("Ignoring text outside of the root element"),
    }
}

/// Inserts `value` under `key`, turning the entry into an array once the key
/// repeats.
fn accumulate(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        None => {
            map.insert(key, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// Resolves the predefined XML entities and character references. Unknown
/// entities such as `&nbsp;` are kept as literal text.
fn unescape(raw: &str) -> String {
    ENTITY_PATTERN
        .replace_all(raw, |caps: &regex::Captures| {
            let entity = &caps[1];
            let resolved = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "amp" => Some('&'),
                "apos" => Some('\''),
                "quot" => Some('"'),
                _ => entity.strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| entity.strip_prefix('#').map(|dec| dec.parse::<u32>().ok()))
                    .flatten()
                    .and_then(char::from_u32),
            };
            match resolved {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn coerce_scalar(text: &str) -> Value {
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if text.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if NUMBER_PATTERN.is_match(text) {
        if let Ok(integer) = text.parse::<i64>() {
            return Value::from(integer);
        }
        if let Some(number) = text.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            return Value::Number(number);
        }
    }
    Value::String(text.to_string())
}
