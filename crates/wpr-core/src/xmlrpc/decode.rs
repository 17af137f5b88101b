//! `methodResponse` parsing.
//!
//! The body is first read into a small element tree with quick-xml, then the
//! tree is interpreted as XML-RPC. Responses are tiny, so the tree costs
//! nothing and keeps the interpretation free of reader state.

use base64::Engine;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{Value, XmlRpcError};

#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn new(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    fn child(&self, name: &str) -> Result<&Element, XmlRpcError> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| malformed(format!("missing <{}> in <{}>", name, self.name)))
    }

    fn only_child(&self) -> Result<&Element, XmlRpcError> {
        match self.children.as_slice() {
            [one] => Ok(one),
            [] => Err(malformed(format!("empty <{}>", self.name))),
            _ => Err(malformed(format!("more than one element in <{}>", self.name))),
        }
    }
}

fn malformed(detail: impl Into<String>) -> XmlRpcError {
    XmlRpcError::Malformed(detail.into())
}

fn parse_tree(xml: &str) -> Result<Element, XmlRpcError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    fn attach(
        stack: &mut [Element],
        root: &mut Option<Element>,
        el: Element,
    ) -> Result<(), XmlRpcError> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(el);
        } else if root.is_some() {
            return Err(malformed("more than one root element"));
        } else {
            *root = Some(el);
        }
        Ok(())
    }

    loop {
        let event = reader
            .read_event()
            .map_err(|e| malformed(format!("xml at byte {}: {}", reader.buffer_position(), e)))?;
        match event {
            Event::Start(start) => stack.push(Element::new(&start)),
            Event::Empty(start) => attach(&mut stack, &mut root, Element::new(&start))?,
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| malformed("unbalanced end tag"))?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    let unescaped = text.unescape().map_err(|e| malformed(e.to_string()))?;
                    top.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("unclosed <{}>", open.name)));
    }
    root.ok_or_else(|| malformed("empty document"))
}

/// Parses an XML-RPC response body into its parameter list.
///
/// A `<fault>` response becomes [`XmlRpcError::Fault`]; anything that is not a
/// well-formed `methodResponse` becomes [`XmlRpcError::Malformed`].
pub fn decode_response(xml: &str) -> Result<Vec<Value>, XmlRpcError> {
    let root = parse_tree(xml)?;
    if root.name != "methodResponse" {
        return Err(malformed(format!(
            "expected <methodResponse>, found <{}>",
            root.name
        )));
    }

    let body = root.only_child()?;
    match body.name.as_str() {
        "params" => body
            .children
            .iter()
            .map(|param| {
                if param.name != "param" {
                    return Err(malformed(format!("unexpected <{}> in <params>", param.name)));
                }
                parse_value(param.child("value")?)
            })
            .collect(),
        "fault" => Err(fault_from(parse_value(body.child("value")?)?)),
        other => Err(malformed(format!("unexpected <{}> in <methodResponse>", other))),
    }
}

fn fault_from(value: Value) -> XmlRpcError {
    let code = match value.member("faultCode") {
        Some(Value::Int(n)) => *n,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    let message = match value.member("faultString") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => format!("{:?}", other),
        None => String::new(),
    };
    XmlRpcError::Fault { code, message }
}

fn parse_value(el: &Element) -> Result<Value, XmlRpcError> {
    if el.name != "value" {
        return Err(malformed(format!("expected <value>, found <{}>", el.name)));
    }
    // Untyped value is a string.
    if el.children.is_empty() {
        return Ok(Value::String(el.text.clone()));
    }

    let typed = el.only_child()?;
    let raw = typed.text.trim();
    let value = match typed.name.as_str() {
        "int" | "i4" | "i8" => Value::Int(
            raw.parse()
                .map_err(|_| malformed(format!("bad <{}> value {:?}", typed.name, raw)))?,
        ),
        "boolean" => match raw {
            "1" => Value::Boolean(true),
            "0" => Value::Boolean(false),
            _ => return Err(malformed(format!("bad <boolean> value {:?}", raw))),
        },
        "string" => Value::String(typed.text.clone()),
        "double" => Value::Double(
            raw.parse()
                .map_err(|_| malformed(format!("bad <double> value {:?}", raw)))?,
        ),
        "dateTime.iso8601" => Value::DateTime(raw.to_string()),
        "base64" => {
            let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            Value::Base64(
                base64::engine::general_purpose::STANDARD
                    .decode(compact)
                    .map_err(|e| malformed(format!("bad <base64>: {}", e)))?,
            )
        }
        "nil" => Value::Nil,
        "array" => Value::Array(
            typed
                .child("data")?
                .children
                .iter()
                .map(parse_value)
                .collect::<Result<_, _>>()?,
        ),
        "struct" => Value::Struct(
            typed
                .children
                .iter()
                .map(|member| {
                    let name = member.child("name")?.text.clone();
                    Ok((name, parse_value(member.child("value")?)?))
                })
                .collect::<Result<_, XmlRpcError>>()?,
        ),
        other => return Err(malformed(format!("unknown value type <{}>", other))),
    };
    Ok(value)
}
