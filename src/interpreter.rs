/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST against a read-only variable environment
/// and produces a number. It also answers structural questions about a tree,
/// such as which variables it needs.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves variables from the caller's environment.
/// - Reports evaluation errors such as division by zero or unbound variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, identifier, function name,
/// constant, operator or parenthesis. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Classifies identifiers into functions, constants and variables.
/// - Reports lexical errors for invalid characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the grouping of the expression according to the
/// operator precedence table.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with position info.
/// - Rejects empty input and tokens left over after the expression.
pub mod parser;
