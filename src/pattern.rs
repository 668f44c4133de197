//! Glob to regex translation.
//!
//! [`glob_to_regex`] walks the glob once, left to right, and emits an anchored
//! regex source string. Each character is first mapped to a [`Token`] by
//! [`classify`]; runs of `*` are resolved by [`classify_star_run`].

use crate::options::Options;

/// Syntactic role of a glob character under a given set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Matches the character itself.
    Literal(char),
    /// `\`, which makes the following character literal.
    Escape,
    /// `?` in extended mode.
    AnyChar,
    /// `[` in extended mode.
    ClassOpen,
    /// `{` in extended mode.
    GroupOpen,
    /// `,` inside an open group.
    GroupSeparator,
    /// `}` closing an open group.
    GroupClose,
    /// First `*` of a run.
    Star,
}

/// How a run of consecutive `*` characters is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarRun {
    /// Any characters, delimiters included.
    CollapseAll,
    /// Zero or more whole delimiter-terminated segments.
    GlobstarSegment,
    /// Any characters up to the next delimiter.
    SingleSegment,
}

/// Maps a single glob character to its role.
///
/// `in_group` tells whether a `{` group is currently open; `,` and `}` only
/// have meaning inside one.
pub fn classify(c: char, options: &Options, in_group: bool) -> Token {
    match c {
        '\\' => Token::Escape,
        '*' => Token::Star,
        '?' if options.extended => Token::AnyChar,
        '[' if options.extended => Token::ClassOpen,
        '{' if options.extended => Token::GroupOpen,
        ',' if options.extended && in_group => Token::GroupSeparator,
        '}' if options.extended && in_group => Token::GroupClose,
        _ => Token::Literal(c),
    }
}

/// Decides what a run of `run_length` stars means.
///
/// `preceding` and `following` are the pattern characters around the run,
/// `None` at the pattern boundaries. A run is a globstar only when globstar
/// mode is on, it has at least two stars and both neighbours are the
/// delimiter or a boundary.
pub fn classify_star_run(
    preceding: Option<char>,
    following: Option<char>,
    run_length: usize,
    options: &Options,
) -> StarRun {
    if !options.globstar {
        return StarRun::CollapseAll;
    }
    let at_boundary = |c: Option<char>| c.is_none_or(|c| c == options.delimiter);
    if run_length > 1 && at_boundary(preceding) && at_boundary(following) {
        StarRun::GlobstarSegment
    } else {
        StarRun::SingleSegment
    }
}

/// Translates `pattern` with the default [`Options`].
pub fn regex_from_glob(pattern: &str) -> String {
    glob_to_regex(pattern, &Options::default())
}

/// Translates a glob pattern into an anchored regex source string.
///
/// The result always starts with `^` and ends with `$`. Translation cannot
/// fail: an unterminated `{` group is closed at the end of the pattern and an
/// unterminated `[` is taken literally.
pub fn glob_to_regex(pattern: &str, options: &Options) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut re = String::with_capacity(pattern.len() * 2 + 2);
    re.push('^');

    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        match classify(chars[i], options, depth > 0) {
            Token::Literal(c) => push_literal(&mut re, c),
            Token::Escape => match chars.get(i + 1) {
                Some(&next) => {
                    push_literal(&mut re, next);
                    i += 1;
                }
                None => push_literal(&mut re, '\\'),
            },
            Token::AnyChar => re.push_str("(?s:.)"),
            Token::ClassOpen => match bracket_class(&chars[i + 1..]) {
                Some((class, consumed)) => {
                    re.push_str(&class);
                    i += consumed;
                }
                None => push_literal(&mut re, '['),
            },
            Token::GroupOpen => {
                depth += 1;
                re.push_str("(?:");
            }
            Token::GroupSeparator => re.push('|'),
            Token::GroupClose => {
                depth -= 1;
                re.push(')');
            }
            Token::Star => {
                let start = i;
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
                let preceding = start.checked_sub(1).map(|p| chars[p]);
                let following = chars.get(i + 1).copied();
                match classify_star_run(preceding, following, i - start + 1, options) {
                    StarRun::CollapseAll => re.push_str("(?s:.*)"),
                    StarRun::SingleSegment => push_segment(&mut re, options.delimiter),
                    StarRun::GlobstarSegment => {
                        re.push_str("(?:");
                        push_segment(&mut re, options.delimiter);
                        re.push_str("(?:");
                        push_literal(&mut re, options.delimiter);
                        re.push_str("|$))*");
                        // The trailing delimiter is part of the globstar.
                        if following.is_some() {
                            i += 1;
                        }
                    }
                }
            }
        }
        i += 1;
    }

    for _ in 0..depth {
        re.push(')');
    }
    re.push('$');

    tracing::trace!(glob = pattern, regex = %re, "translated glob");
    re
}

/// Scans a bracket class body, `rest` starting right after the `[`.
///
/// Returns the regex class and the number of characters consumed including
/// the closing `]`, or `None` if the class is never closed. A `]` directly
/// after the opening bracket (or after `^`) is a member, not the terminator.
fn bracket_class(rest: &[char]) -> Option<(String, usize)> {
    let mut class = String::from("[");
    let mut pos = 0;
    if rest.first() == Some(&'^') {
        class.push('^');
        pos += 1;
    }
    let members_start = pos;

    while let Some(&c) = rest.get(pos) {
        match c {
            ']' if pos > members_start => {
                class.push(']');
                return Some((class, pos + 1));
            }
            '\\' => match rest.get(pos + 1) {
                Some(&next) => {
                    push_class_member(&mut class, next);
                    pos += 1;
                }
                None => push_class_member(&mut class, '\\'),
            },
            '[' => match posix_class(&rest[pos..]) {
                Some(len) => {
                    class.extend(&rest[pos..pos + len]);
                    pos += len - 1;
                }
                None => push_class_member(&mut class, '['),
            },
            // `--` is a set operator for the regex engine.
            '-' if !class.ends_with('-') => class.push('-'),
            c => push_class_member(&mut class, c),
        }
        pos += 1;
    }
    None
}

/// Length of a `[:name:]` (or `[:^name:]`) term at the start of `rest`.
fn posix_class(rest: &[char]) -> Option<usize> {
    if rest.get(1) != Some(&':') {
        return None;
    }
    let mut end = 2;
    if rest.get(end) == Some(&'^') {
        end += 1;
    }
    let name_start = end;
    while rest.get(end).is_some_and(|c| c.is_ascii_alphabetic()) {
        end += 1;
    }
    let closed = rest.get(end) == Some(&':') && rest.get(end + 1) == Some(&']');
    (end > name_start && closed).then_some(end + 2)
}

fn push_segment(re: &mut String, delimiter: char) {
    re.push_str("[^");
    push_class_member(re, delimiter);
    re.push_str("]*");
}

fn push_literal(re: &mut String, c: char) {
    if is_regex_meta(c) {
        re.push('\\');
    }
    re.push(c);
}

fn push_class_member(re: &mut String, c: char) {
    if matches!(c, '[' | ']' | '\\' | '^' | '-' | '&' | '~') {
        re.push('\\');
    }
    re.push(c);
}

fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
            | '='
            | '!'
            | ','
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn extended() -> Options {
        Options::default().with_extended(true)
    }

    fn globstar() -> Options {
        Options::default().with_globstar(true)
    }

    #[rstest]
    #[case('a', Token::Literal('a'))]
    #[case('/', Token::Literal('/'))]
    #[case('?', Token::Literal('?'))]
    #[case('[', Token::Literal('['))]
    #[case('{', Token::Literal('{'))]
    #[case(',', Token::Literal(','))]
    #[case('*', Token::Star)]
    #[case('\\', Token::Escape)]
    fn classify_plain_mode(#[case] c: char, #[case] expected: Token) {
        assert_eq!(classify(c, &Options::default(), false), expected);
    }

    #[rstest]
    #[case('?', false, Token::AnyChar)]
    #[case('[', false, Token::ClassOpen)]
    #[case(']', false, Token::Literal(']'))]
    #[case('{', false, Token::GroupOpen)]
    #[case('{', true, Token::GroupOpen)]
    #[case(',', false, Token::Literal(','))]
    #[case(',', true, Token::GroupSeparator)]
    #[case('}', false, Token::Literal('}'))]
    #[case('}', true, Token::GroupClose)]
    fn classify_extended_mode(#[case] c: char, #[case] in_group: bool, #[case] expected: Token) {
        assert_eq!(classify(c, &extended(), in_group), expected);
    }

    #[rstest]
    #[case(None, None, 1, StarRun::CollapseAll)]
    #[case(None, None, 2, StarRun::CollapseAll)]
    #[case(Some('/'), Some('/'), 3, StarRun::CollapseAll)]
    fn star_runs_collapse_without_globstar(
        #[case] preceding: Option<char>,
        #[case] following: Option<char>,
        #[case] run_length: usize,
        #[case] expected: StarRun,
    ) {
        assert_eq!(
            classify_star_run(preceding, following, run_length, &Options::default()),
            expected
        );
    }

    #[rstest]
    #[case::lone_double(None, None, 2, StarRun::GlobstarSegment)]
    #[case::leading(None, Some('/'), 2, StarRun::GlobstarSegment)]
    #[case::trailing(Some('/'), None, 2, StarRun::GlobstarSegment)]
    #[case::between(Some('/'), Some('/'), 2, StarRun::GlobstarSegment)]
    #[case::long_run(Some('/'), Some('/'), 5, StarRun::GlobstarSegment)]
    #[case::single_star(Some('/'), Some('/'), 1, StarRun::SingleSegment)]
    #[case::glued_before(Some('r'), None, 2, StarRun::SingleSegment)]
    #[case::glued_after(Some('/'), Some('.'), 2, StarRun::SingleSegment)]
    fn star_runs_with_globstar(
        #[case] preceding: Option<char>,
        #[case] following: Option<char>,
        #[case] run_length: usize,
        #[case] expected: StarRun,
    ) {
        assert_eq!(
            classify_star_run(preceding, following, run_length, &globstar()),
            expected
        );
    }

    #[test]
    fn star_run_uses_configured_delimiter() {
        let opts = globstar().with_delimiter('?');
        assert_eq!(
            classify_star_run(Some('?'), None, 2, &opts),
            StarRun::GlobstarSegment
        );
        assert_eq!(
            classify_star_run(Some('/'), None, 2, &opts),
            StarRun::SingleSegment
        );
    }

    #[rstest]
    #[case("", "^$")]
    #[case("abc", "^abc$")]
    #[case("*", "^(?s:.*)$")]
    #[case("***", "^(?s:.*)$")]
    #[case("f*uck", "^f(?s:.*)uck$")]
    #[case("a.b", r"^a\.b$")]
    #[case("f?o", r"^f\?o$")]
    #[case("fo[oz]", r"^fo\[oz\]$")]
    #[case("{a,b}", r"^\{a\,b\}$")]
    #[case(r"\*", r"^\*$")]
    #[case(r"\a", "^a$")]
    #[case(r"a\", r"^a\\$")]
    fn translates_plain_globs(#[case] glob: &str, #[case] expected: &str) {
        assert_eq!(regex_from_glob(glob), expected);
    }

    #[rstest]
    #[case("f?o", "^f(?s:.)o$")]
    #[case("fo[oz]", "^fo[oz]$")]
    #[case("[^a-c]", "^[^a-c]$")]
    #[case("[]a]", r"^[\]a]$")]
    #[case("[a&&b]", r"^[a\&\&b]$")]
    #[case(r"[\]]", r"^[\]]$")]
    #[case("foo{bar,baaz}", "^foo(?:bar|baaz)$")]
    #[case("foo{bar,b*z}", "^foo(?:bar|b(?s:.*)z)$")]
    #[case("[[:digit:]]", "^[[:digit:]]$")]
    #[case("[[:^alpha:]_]", "^[[:^alpha:]_]$")]
    #[case("[[:x]", r"^[\[:x]$")]
    #[case("{a,{b,c}}", "^(?:a|(?:b|c))$")]
    #[case("a,b}", r"^a\,b\}$")]
    fn translates_extended_globs(#[case] glob: &str, #[case] expected: &str) {
        assert_eq!(glob_to_regex(glob, &extended()), expected);
    }

    #[rstest]
    #[case("/foo/*", "^/foo/[^/]*$")]
    #[case("/foo/**", "^/foo/(?:[^/]*(?:/|$))*$")]
    #[case("**/foo", "^(?:[^/]*(?:/|$))*foo$")]
    #[case("/foo/bar**", "^/foo/bar[^/]*$")]
    #[case("/foo/**.txt", r"^/foo/[^/]*\.txt$")]
    fn translates_globstar_globs(#[case] glob: &str, #[case] expected: &str) {
        assert_eq!(glob_to_regex(glob, &globstar()), expected);
    }

    #[test]
    fn escapes_metacharacter_delimiter() {
        let opts = globstar().with_delimiter('?');
        assert_eq!(
            glob_to_regex("http*?**", &opts),
            r"^http[^?]*\?(?:[^?]*(?:\?|$))*$"
        );
    }

    #[test]
    fn unterminated_group_is_closed() {
        assert_eq!(glob_to_regex("foo{bar,baz", &extended()), "^foo(?:bar|baz)$");
    }

    #[test]
    fn unterminated_class_is_literal() {
        assert_eq!(glob_to_regex("fo[o*", &extended()), r"^fo\[o(?s:.*)$");
        assert_eq!(glob_to_regex("[]", &extended()), r"^\[\]$");
    }

    #[test]
    fn translation_is_deterministic() {
        let opts = extended().with_globstar(true);
        let glob = "http://?o[oz].b*z.com/**/{*.js,*.html}";
        assert_eq!(glob_to_regex(glob, &opts), glob_to_regex(glob, &opts));
    }
}
