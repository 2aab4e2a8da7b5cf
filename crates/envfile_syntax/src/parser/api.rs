/// Return `true` if `source` starts with a valid statement.
///
/// Builds a [`Parser`], steps onto the first symbol, and runs [`Parser::statement`] once.
/// Anything after the first line terminator is ignored.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn is_statement(source: &str) -> bool {
    let mut parser = Parser::new(source);
    parser.advance();
    parser.statement()
}
