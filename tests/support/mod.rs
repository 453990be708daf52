use exprcc::errors::CompilerError;

pub fn compile(code: &str) -> String {
    exprcc::compiler::compile_string(code).expect("Failed to compile.")
}

pub fn compile_err(code: &str) -> CompilerError {
    exprcc::compiler::compile_string(code).expect_err("Expected a compile error.")
}
