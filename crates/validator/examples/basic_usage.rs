//! Basic usage example for gatekeep-validator
//!
//! Runs each check once, in a fixed illustrative order, and prints the
//! returned values. Recovering checks report through the stdout sink;
//! fail-fast checks propagate to `main`.

use gatekeep_validator::prelude::*;

fn main() -> Result<(), ValidationError> {
    let sink = StdoutSink;

    println!("email check: {}", validate_email("agashkina@mail.com")?);
    println!("cyrillic check: {}", validate_no_cyrillic("My4thLab")?);

    safe_text_length("", &sink);
    safe_get_substring("Самый крутой текст", 0, 5, &sink);

    validate_email_and_cyrillic("agashkina@mail.com", "Hello", &sink)?;
    validate_non_empty_text("Not_empty_at_all", &sink)?;
    validate_text_content("agashkina@mail.com", "Hello", &sink)?;
    validate_non_empty_no_cyrillic("Hello", &sink)?;

    println!("uppercased text: {}", get_upper_text("hello")?);
    println!("character index: {}", find_character("example", 'e')?);
    println!(
        "domain check: {}",
        check_email_domain("agashkina@mail.com", "@mail.com")?
    );

    Ok(())
}
