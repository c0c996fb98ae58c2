/// Line-oriented buffer for emitted TypeScript source.
pub(crate) struct SourceWriter {
  buf: String,
}

impl SourceWriter {
  pub(crate) fn new() -> Self {
    Self { buf: String::new() }
  }

  pub(crate) fn line(&mut self, text: &str) {
    self.buf.push_str(text);
    self.buf.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buf.push('\n');
  }

  /// Emits a JSDoc block, one ` * ` line per input line.
  pub(crate) fn jsdoc(&mut self, text: &str) {
    self.line("/**");
    for doc_line in text.lines() {
      if doc_line.is_empty() {
        self.line(" *");
      } else {
        self.line(&format!(" * {doc_line}"));
      }
    }
    self.line(" */");
  }

  pub(crate) fn finish(self) -> String {
    self.buf
  }
}
