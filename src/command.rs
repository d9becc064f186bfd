use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::constant::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{GenError, Result};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    #[serde(rename = "set")]
    Set,
    #[serde(rename = "get")]
    Get,
    #[serde(rename = "del")]
    Delete,
}

impl Op {
    pub const NAMES: [&'static str; 3] = ["set", "get", "del"];

    pub fn name(self) -> &'static str {
        match self {
            Op::Set => "set",
            Op::Get => "get",
            Op::Delete => "del",
        }
    }
}

impl Default for Op {
    fn default() -> Op {
        Op::Set
    }
}

impl FromStr for Op {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Op> {
        match s {
            "set" => Ok(Op::Set),
            "get" => Ok(Op::Get),
            "del" => Ok(Op::Delete),
            other => Err(GenError::InvalidOp(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Endpoint {
        Endpoint {
            host: host.into(),
            port,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Endpoint {
    fn default() -> Endpoint {
        Endpoint::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Delete { key: String },
}

impl Command {
    pub fn set(key: String, value: String) -> Command {
        Command::Set { key, value }
    }

    pub fn get(key: String) -> Command {
        Command::Get { key }
    }

    pub fn delete(key: String) -> Command {
        Command::Delete { key }
    }

    /// Key and value are both the decimal form of `index`.
    pub fn for_index(op: Op, index: u64) -> Command {
        let key = index.to_string();
        match op {
            Op::Set => Command::set(key.clone(), key),
            Op::Get => Command::get(key),
            Op::Delete => Command::delete(key),
        }
    }

    // key and value are embedded verbatim, a quote breaks the JSON body
    pub fn render(&self, endpoint: &Endpoint) -> String {
        let base = endpoint.base_url();
        match self {
            Command::Set { key, value } => format!(
                r#"curl -X POST -H "Content-Type: application/json" -d "{{\"key\": \"{}\", \"value\": \"{}\"}}" {}/set"#,
                key, value, base
            ),
            Command::Get { key } => format!("curl {}/get?key={}", base, key),
            Command::Delete { key } => format!("curl {}/del?key={}", base, key),
        }
    }
}

pub fn format_set(key: &str, value: &str) -> String {
    Command::set(key.to_owned(), value.to_owned()).render(&Endpoint::default())
}

pub fn format_get(key: &str) -> String {
    Command::get(key.to_owned()).render(&Endpoint::default())
}

pub fn format_delete(key: &str) -> String {
    Command::delete(key.to_owned()).render(&Endpoint::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_line_for_zero() {
        assert_eq!(
            format_set("0", "0"),
            r#"curl -X POST -H "Content-Type: application/json" -d "{\"key\": \"0\", \"value\": \"0\"}" http://localhost:8080/set"#
        );
    }

    #[test]
    fn get_and_delete_lines() {
        assert_eq!(format_get("42"), "curl http://localhost:8080/get?key=42");
        assert_eq!(format_delete("42"), "curl http://localhost:8080/del?key=42");
    }

    #[test]
    fn render_uses_endpoint() {
        let endpoint = Endpoint::new("10.0.0.7", 9000);
        assert_eq!(
            Command::get("k".to_owned()).render(&endpoint),
            "curl http://10.0.0.7:9000/get?key=k"
        );
        assert!(Command::set("a".to_owned(), "b".to_owned())
            .render(&endpoint)
            .ends_with(" http://10.0.0.7:9000/set"));
    }

    #[test]
    fn quotes_are_not_escaped() {
        let line = format_set("a\"b", "v");
        assert!(line.contains(r#"\"key\": \"a"b\""#));
    }

    #[test]
    fn for_index_uses_decimal_key() {
        assert_eq!(
            Command::for_index(Op::Set, 999),
            Command::set("999".to_owned(), "999".to_owned())
        );
        assert_eq!(
            Command::for_index(Op::Delete, 7),
            Command::delete("7".to_owned())
        );
    }

    #[test]
    fn parse_op() {
        assert_eq!("del".parse::<Op>().unwrap(), Op::Delete);
        assert_eq!(Op::Get.name(), "get");
        match "put".parse::<Op>() {
            Err(GenError::InvalidOp(op)) => assert_eq!(op, "put"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
