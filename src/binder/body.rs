use super::model::{BoundOutput, BoundParameter, CallBody};

/// Names the generated file and function bodies already use: imported
/// packages, package-level declarations and body locals.
pub const GENERATED_IDENTIFIERS: [&str; 12] = [
    "abi", "big", "common", "runtime", "strings", "ABI", "Bin", "parsedABI", "input", "err", "ret",
    "res",
];

/// Go parameter list: `a *big.Int, b common.Address`.
pub fn parse_in(inputs: &[BoundParameter]) -> String {
    inputs
        .iter()
        .map(|p| format!("{} {}", p.ident, p.target))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Go result list; parenthesised only when there is more than one result.
pub fn parse_out(outputs: &[BoundOutput]) -> String {
    let list = outputs
        .iter()
        .map(|o| o.target.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    if outputs.len() > 1 {
        format!("({})", list)
    } else {
        list
    }
}

pub fn compose_body(inputs: &[BoundParameter], outputs: &[BoundOutput]) -> CallBody {
    CallBody {
        pack_args: inputs
            .iter()
            .map(|p| p.ident.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        results: outputs
            .iter()
            .enumerate()
            .map(|(i, o)| format!("res[{}].({})", i, o.target))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Statements of the generated function body, one per line, without indentation.
pub fn parse_body(method: &str, body: &CallBody, has_outputs: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let pack = if body.pack_args.is_empty() {
        format!("input, err := parsedABI.Pack(\"{}\")", method)
    } else {
        format!("input, err := parsedABI.Pack(\"{}\", {})", method, body.pack_args)
    };
    lines.push(pack);
    push_panic(&mut lines);

    if has_outputs {
        lines.push("ret, _, err := runtime.Execute(common.Hex2Bytes(Bin), input, nil)".to_string());
        push_panic(&mut lines);
        lines.push(format!("res, err := parsedABI.Unpack(\"{}\", ret)", method));
        push_panic(&mut lines);
        lines.push(format!("return {}", body.results));
    } else {
        lines.push("if _, _, err := runtime.Execute(common.Hex2Bytes(Bin), input, nil); err != nil {".to_string());
        lines.push("\tpanic(err)".to_string());
        lines.push("}".to_string());
    }

    lines
}

fn push_panic(lines: &mut Vec<String>) {
    lines.push("if err != nil {".to_string());
    lines.push("\tpanic(err)".to_string());
    lines.push("}".to_string());
}
