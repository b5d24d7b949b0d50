//! The `explain` command: describe an error code.

use arith_diagnostic::ErrorCode;

pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Known codes:");
        for code in ErrorCode::ALL {
            eprintln!("  {code}  {}", code.description());
        }
        std::process::exit(1);
    };

    println!("{code}: {}", code.description());
    if code.is_internal() {
        println!();
        println!("The line was accepted by the parser but has no meaning to the evaluator.");
        println!("Sign prefixes (`-1`), exponentiation (`2^3`) and assignment targets");
        println!("other than a plain variable (`1 + a = 2`) report this code.");
    }
}
