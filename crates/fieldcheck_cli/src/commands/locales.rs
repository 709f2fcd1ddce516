use fieldcheck_core::DEFAULT_LANGUAGE;
use fieldcheck_validator::Translations;

pub fn execute() {
    println!("Built-in locales:");
    for locale in Translations::available_locales() {
        if locale == DEFAULT_LANGUAGE {
            println!("  {} (default)", locale);
        } else {
            println!("  {}", locale);
        }
    }
}
