use crate::core::patterns::{INPUT_RULE, MODULE_NAME_RULE, OUTPUT_RULE, PARAMETER_RULE};
use crate::domain::model::{ModuleCandidate, Parameter, RawPortMatch};
use crate::utils::error::{IoListError, Result};
use regex::Captures;
use std::borrow::Cow;

/// 輸入與輸出規則各自的原始匹配，皆依原始碼順序排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortMatches {
    pub inputs: Vec<RawPortMatch>,
    pub outputs: Vec<RawPortMatch>,
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn to_raw_port(caps: &Captures<'_>) -> RawPortMatch {
    let span = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
    RawPortMatch {
        storage_class: group(caps, 1),
        dim_a: group(caps, 2),
        dim_b: group(caps, 3),
        name: group(caps, 4),
        span,
    }
}

/// 對整份原始碼分別套用輸入與輸出規則
pub fn extract_ports(source: &str) -> PortMatches {
    let inputs: Vec<RawPortMatch> = INPUT_RULE.find_all(source).iter().map(to_raw_port).collect();
    let outputs: Vec<RawPortMatch> = OUTPUT_RULE
        .find_all(source)
        .iter()
        .map(to_raw_port)
        .collect();

    tracing::debug!(
        "Port extractor matched {} input and {} output declarations",
        inputs.len(),
        outputs.len()
    );

    PortMatches { inputs, outputs }
}

pub fn find_module_candidates(source: &str) -> Vec<ModuleCandidate> {
    MODULE_NAME_RULE
        .find_all(source)
        .iter()
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(ModuleCandidate {
                name: group(caps, 1),
                span: (whole.start(), whole.end()),
            })
        })
        .collect()
}

/// 模組名稱必須在整份原始碼中恰好匹配一次
pub fn extract_module_name(source: &str) -> Result<String> {
    let mut candidates = find_module_candidates(source);
    if candidates.len() != 1 {
        tracing::debug!(
            "Module-name rule matched {} times, expected exactly one",
            candidates.len()
        );
        return Err(IoListError::ModuleNameNotIdentified { candidates });
    }
    Ok(candidates.remove(0).name)
}

pub fn extract_parameters(source: &str) -> Vec<Parameter> {
    PARAMETER_RULE
        .find_all(source)
        .iter()
        .map(|caps| Parameter {
            name: group(caps, 1),
        })
        .collect()
}

/// 將 `//` 與 `/* */` 註解換成空白，保留換行與位元組位置；字串常值內的內容不受影響
pub fn mask_comments(source: &str) -> Cow<'_, str> {
    if !source.contains("//") && !source.contains("/*") {
        return Cow::Borrowed(source);
    }

    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Code,
        Str,
        StrEscape,
        Line,
        Block,
    }

    let bytes = source.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match (b, next) {
                (b'/', Some(b'/')) => {
                    state = State::Line;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'/', Some(b'*')) => {
                    state = State::Block;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                (b'"', _) => {
                    state = State::Str;
                    out.push(b);
                }
                _ => out.push(b),
            },
            State::Str => {
                match b {
                    b'\\' => state = State::StrEscape,
                    b'"' | b'\n' => state = State::Code,
                    _ => {}
                }
                out.push(b);
            }
            State::StrEscape => {
                state = State::Str;
                out.push(b);
            }
            State::Line => {
                if b == b'\n' {
                    state = State::Code;
                    out.push(b);
                } else {
                    out.push(b' ');
                }
            }
            State::Block => {
                if b == b'*' && next == Some(b'/') {
                    state = State::Code;
                    out.extend_from_slice(b"  ");
                    i += 2;
                    continue;
                }
                out.push(if b == b'\n' { b'\n' } else { b' ' });
            }
        }
        i += 1;
    }

    // 註解中的多位元組字元是整段被替換，輸出仍為合法 UTF-8
    Cow::Owned(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIAL_TX: &str = "module serialTX #
    (
    parameter INCR = 26'd25770 // amount by which the accumulator is incremented
    )
    (
    input clk,
    input reset,
    input [7:0] data,
    input send,
    output reg txOut,
    output busy
    );
endmodule
";

    #[test]
    fn test_extract_ports_in_source_order() {
        let matches = extract_ports(SERIAL_TX);
        let inputs: Vec<&str> = matches.inputs.iter().map(|m| m.name.as_str()).collect();
        let outputs: Vec<&str> = matches.outputs.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(inputs, vec!["clk", "reset", "data", "send"]);
        assert_eq!(outputs, vec!["txOut", "busy"]);
        assert_eq!(matches.inputs[2].dim_a, "[7:0]");
        assert_eq!(matches.outputs[0].storage_class, "reg");
    }

    #[test]
    fn test_duplicates_are_not_dropped_by_extractor() {
        let matches = extract_ports("input a,\ninput [3:0] a,\n");
        assert_eq!(matches.inputs.len(), 2);
        assert!(matches.outputs.is_empty());
    }

    #[test]
    fn test_extract_module_name() {
        assert_eq!(extract_module_name(SERIAL_TX).unwrap(), "serialTX");
    }

    #[test]
    fn test_extract_module_name_rejects_zero_and_many() {
        match extract_module_name("input a;") {
            Err(IoListError::ModuleNameNotIdentified { candidates }) => {
                assert!(candidates.is_empty())
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let two = "module a (input x);\nendmodule\nmodule b (input y);\nendmodule\n";
        match extract_module_name(two) {
            Err(IoListError::ModuleNameNotIdentified { candidates }) => {
                let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["a", "b"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_extract_parameters() {
        let params = extract_parameters(SERIAL_TX);
        assert_eq!(params, vec![Parameter { name: "INCR".to_string() }]);
        assert!(extract_parameters("module m (input a);").is_empty());
    }

    #[test]
    fn test_mask_comments_preserves_offsets() {
        let source = "input a; // input ghost\n/* output\n phantom */ output b;";
        let masked = mask_comments(source);
        assert_eq!(masked.len(), source.len());
        assert_eq!(masked.matches('\n').count(), 2);

        let matches = extract_ports(&masked);
        let inputs: Vec<&str> = matches.inputs.iter().map(|m| m.name.as_str()).collect();
        let outputs: Vec<&str> = matches.outputs.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(inputs, vec!["a"]);
        assert_eq!(outputs, vec!["b"]);
    }

    #[test]
    fn test_mask_comments_keeps_string_literals() {
        let source = "$display(\"http://example\"); // gone";
        let masked = mask_comments(source);
        assert!(masked.contains("\"http://example\""));
        assert!(!masked.contains("gone"));
    }

    #[test]
    fn test_mask_comments_borrows_when_no_comments() {
        assert!(matches!(mask_comments("input a;"), Cow::Borrowed(_)));
    }
}
