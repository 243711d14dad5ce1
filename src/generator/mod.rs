use crate::binder::body::{parse_body, parse_in, parse_out};
use crate::binder::model::{BindingModel, MethodBinding};

pub fn generate(model: &BindingModel) -> String {
    let mut output = String::new();

    output.push_str("// Code generated by evmbind. DO NOT EDIT.\n\n");
    output.push_str(&format!("package {}\n\n", model.package));

    output.push_str("import (\n");
    output.push_str("\t\"math/big\"\n");
    output.push_str("\t\"strings\"\n\n");
    output.push_str("\t\"github.com/ethereum/go-ethereum/accounts/abi\"\n");
    output.push_str("\t\"github.com/ethereum/go-ethereum/common\"\n");
    output.push_str("\t\"github.com/ethereum/go-ethereum/core/vm/runtime\"\n");
    output.push_str(")\n\n");

    // Keep imports used when no binding needs them.
    output.push_str("var (\n");
    output.push_str("\t_ = big.NewInt\n");
    output.push_str("\t_ = common.Big1\n");
    output.push_str(")\n\n");

    output.push_str("// ABI is the input ABI used to generate the binding from.\n");
    output.push_str(&format!("const ABI = \"{}\"\n\n", model.abi));

    output.push_str("// Bin is the compiled bytecode executed by the bindings.\n");
    output.push_str(&format!("const Bin = \"{}\"\n\n", model.bytecode));

    output.push_str("var parsedABI, _ = abi.JSON(strings.NewReader(ABI))\n");

    for method in &model.methods {
        output.push('\n');
        output.push_str(&generate_method(method));
    }

    output
}

fn generate_method(method: &MethodBinding) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "// {} is a binding for \"{}\".\n",
        method.name, method.raw
    ));
    output.push_str("//\n");
    output.push_str(&format!("// Selector: {}\n", method.selector));

    let returns = parse_out(&method.outputs);
    if returns.is_empty() {
        output.push_str(&format!(
            "func {}({}) {{\n",
            method.name,
            parse_in(&method.inputs)
        ));
    } else {
        output.push_str(&format!(
            "func {}({}) {} {{\n",
            method.name,
            parse_in(&method.inputs),
            returns
        ));
    }

    for line in parse_body(&method.method, &method.body, !method.outputs.is_empty()) {
        output.push('\t');
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str("}\n");
    output
}
