// inflect-singular: Print the singular form(s) of English words.
//
// Usage:
//   inflect-singular [OPTIONS] [WORD...]
//
// Options:
//   -f, --first            Print only the first candidate
//   -s, --separator SEP    Candidate separator (default ",")
//   -q, --quiet            Print only the candidates
//   -h, --help             Print help

fn main() {
    inflect_cli::main_with(inflect_cli::Direction::Singular);
}
