// inflect-plural: Print the plural form(s) of English words.
//
// Words without a matching rule get a plain "s" appended.
//
// Usage:
//   inflect-plural [OPTIONS] [WORD...]
//
// Options:
//   -f, --first            Print only the first candidate
//   -s, --separator SEP    Candidate separator (default ",")
//   -q, --quiet            Print only the candidates
//   -h, --help             Print help

fn main() {
    inflect_cli::main_with(inflect_cli::Direction::Plural);
}
