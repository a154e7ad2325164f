/// Separator used by [`TextBuilder::sequence`] and [`TextBuilder::list`].
pub const DEFAULT_SEPARATOR: &str = ",\n";

/// Line prefix emitted by [`TextBuilder::documentation`].
pub const DOC_PREFIX: &str = "///";

/// Append-only buffer for assembling one fragment of generated text.
///
/// A builder is created empty, mutated by a chain of append calls, and
/// consumed exactly once via [`TextBuilder::finish`]. Nested fragments are
/// built with their own `TextBuilder`, finished into a `String`, and spliced
/// in with [`TextBuilder::fragment`], which re-indents them to the splice
/// point.
///
/// Appends that end up with nothing to render elide the line currently being
/// built instead of leaving blank lines behind: the whitespace-only tail of
/// the open line is deleted, and the next literal beginning with a line break
/// has that break absorbed. Callers can therefore append one fragment per
/// declaration element unconditionally.
#[derive(Debug, Default)]
pub struct TextBuilder {
    buf: String,
    removed_line: bool,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text verbatim.
    ///
    /// When the previous append removed its line, a single leading line
    /// break in `text` is dropped so the removed line does not reappear as
    /// a blank one.
    pub fn literal(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let text = if self.removed_line {
            text.strip_prefix('\n').unwrap_or(text)
        } else {
            text
        };
        self.removed_line = false;
        self.buf.push_str(text);
        self
    }

    /// Splice a nested fragment at the current insertion point.
    ///
    /// Every line of `nested` after the first is prefixed with the
    /// indentation of the line currently being built. Blank lines inside
    /// `nested` stay blank. An empty `nested` removes the open line.
    pub fn fragment(&mut self, nested: &str) -> &mut Self {
        if nested.is_empty() {
            return self.remove_open_line();
        }

        if !nested.contains('\n') {
            self.buf.push_str(nested);
            self.removed_line = false;
            return self;
        }

        let indent = self.open_line_indent().to_string();
        let mut lines = nested.split('\n');
        if let Some(first) = lines.next() {
            self.buf.push_str(first);
        }
        for line in lines {
            self.buf.push('\n');
            if !line.is_empty() {
                self.buf.push_str(&indent);
                self.buf.push_str(line);
            }
        }
        self.removed_line = false;
        self
    }

    /// Append `when_true()` if `flag` holds, otherwise remove the open line.
    pub fn conditional(&mut self, flag: bool, when_true: impl FnOnce() -> String) -> &mut Self {
        if flag {
            let rendered = when_true();
            self.fragment(&rendered)
        } else {
            self.remove_open_line()
        }
    }

    /// Append `when_true()` if `flag` holds, otherwise `when_false()`.
    pub fn conditional_or(
        &mut self,
        flag: bool,
        when_true: impl FnOnce() -> String,
        when_false: impl FnOnce() -> String,
    ) -> &mut Self {
        let rendered = if flag { when_true() } else { when_false() };
        self.fragment(&rendered)
    }

    /// Append `render(value)` if `value` is present, otherwise remove the
    /// open line.
    pub fn optional<T>(&mut self, value: Option<T>, render: impl FnOnce(T) -> String) -> &mut Self {
        match value {
            Some(value) => {
                let rendered = render(value);
                self.fragment(&rendered)
            }
            None => self.remove_open_line(),
        }
    }

    /// Append `render(value)` if `value` is present and `keep` accepts it,
    /// otherwise `otherwise()`.
    pub fn optional_or<T>(
        &mut self,
        value: Option<T>,
        keep: impl FnOnce(&T) -> bool,
        render: impl FnOnce(T) -> String,
        otherwise: impl FnOnce() -> String,
    ) -> &mut Self {
        match value {
            Some(value) if keep(&value) => {
                let rendered = render(value);
                self.fragment(&rendered)
            }
            _ => {
                let rendered = otherwise();
                self.fragment(&rendered)
            }
        }
    }

    /// Render every item and join the non-empty renders with `",\n"`.
    pub fn sequence<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        render: impl FnMut(T) -> String,
    ) -> &mut Self {
        self.sequence_joined(items, render, DEFAULT_SEPARATOR, None)
    }

    /// Render every item, join the non-empty renders with `separator`, and
    /// append `terminator` after the last one.
    ///
    /// When no item renders non-empty content the open line is removed and
    /// the terminator is not emitted.
    pub fn sequence_joined<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        mut render: impl FnMut(T) -> String,
        separator: &str,
        terminator: Option<&str>,
    ) -> &mut Self {
        let rendered: Vec<String> = items
            .into_iter()
            .map(|item| render(item))
            .filter(|piece| !piece.is_empty())
            .collect();
        self.join_rendered(rendered, separator, terminator)
    }

    /// As [`TextBuilder::sequence`], but two or more items render as an
    /// indented block while a single item renders inline.
    pub fn list<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        render: impl FnMut(T) -> String,
    ) -> &mut Self {
        self.list_joined(items, render, DEFAULT_SEPARATOR, None)
    }

    /// As [`TextBuilder::sequence_joined`], with the block/inline treatment
    /// of [`TextBuilder::list`].
    pub fn list_joined<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        mut render: impl FnMut(T) -> String,
        separator: &str,
        terminator: Option<&str>,
    ) -> &mut Self {
        let rendered: Vec<String> = items
            .into_iter()
            .map(|item| render(item))
            .filter(|piece| !piece.is_empty())
            .collect();

        if rendered.len() < 2 {
            return self.join_rendered(rendered, separator, terminator);
        }

        let mut joined = rendered.join(separator);
        if let Some(terminator) = terminator {
            joined.push_str(terminator);
        }
        self.literal("\n  ");
        self.fragment(&joined);
        self.literal("\n")
    }

    /// Evaluate `condition`/`render` until `condition` is false, collecting
    /// the renders, then join them as [`TextBuilder::sequence_joined`] does.
    pub fn repeated(
        &mut self,
        mut condition: impl FnMut() -> bool,
        mut render: impl FnMut() -> String,
        separator: &str,
        terminator: Option<&str>,
    ) -> &mut Self {
        let mut rendered = Vec::new();
        while condition() {
            let piece = render();
            if !piece.is_empty() {
                rendered.push(piece);
            }
        }
        self.join_rendered(rendered, separator, terminator)
    }

    /// Append `text` as comment lines, one per input line, each prefixed
    /// with `prefix` and a space. An empty input line renders as the bare
    /// prefix. A missing or empty `text` removes the open line.
    pub fn comment(&mut self, text: Option<&str>, prefix: &str) -> &mut Self {
        let Some(text) = text.filter(|text| !text.is_empty()) else {
            return self.remove_open_line();
        };
        let rendered: Vec<String> = text
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    prefix.to_string()
                } else {
                    format!("{prefix} {line}")
                }
            })
            .collect();
        let joined = rendered.join("\n");
        self.fragment(&joined)
    }

    /// Append `text` as doc-comment lines.
    pub fn documentation(&mut self, text: Option<&str>) -> &mut Self {
        self.comment(text, DOC_PREFIX)
    }

    /// Current buffer contents.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the builder and return the assembled text.
    pub fn finish(self) -> String {
        self.buf
    }

    fn join_rendered(
        &mut self,
        rendered: Vec<String>,
        separator: &str,
        terminator: Option<&str>,
    ) -> &mut Self {
        if rendered.is_empty() {
            return self.remove_open_line();
        }
        let mut joined = rendered.join(separator);
        if let Some(terminator) = terminator {
            joined.push_str(terminator);
        }
        self.fragment(&joined)
    }

    /// Delete the open line when it holds only whitespace.
    ///
    /// The open line is everything after the most recent line break (or the
    /// whole buffer). When it contains non-whitespace content the append
    /// that had nothing to say was embedded mid-line, and nothing is
    /// deleted.
    fn remove_open_line(&mut self) -> &mut Self {
        let line_start = self.buf.rfind('\n').map_or(0, |idx| idx + 1);
        let open_line = &self.buf[line_start..];
        if open_line.chars().all(char::is_whitespace) {
            self.buf.truncate(line_start);
            self.removed_line = true;
        }
        self
    }

    /// Leading run of spaces and tabs on the open line.
    fn open_line_indent(&self) -> &str {
        let line_start = self.buf.rfind('\n').map_or(0, |idx| idx + 1);
        let open_line = &self.buf[line_start..];
        let indent_end = open_line
            .find(|ch: char| ch != ' ' && ch != '\t')
            .unwrap_or(open_line.len());
        &open_line[..indent_end]
    }
}
