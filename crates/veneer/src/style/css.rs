//! CSS declaration-block parsing.
//!
//! # Motivation
//!
//! Rules are most naturally written the way stylesheets are written. This
//! module parses a plain CSS declaration block (the text between braces)
//! into a [`StyleRule`](super::StyleRule), so component styles can be
//! declared as:
//!
//! ```css
//! padding: 12px 24px;
//! font-size: 1rem;
//! background-color: var(--primary);
//! color: var(--buttonText, white);
//! ```
//!
//! The parser is built on top of `cssparser` (the same tokenizer used by
//! Firefox), ensuring robust handling of syntax, comments, and escapes.
//!
//! # Mapping
//!
//! - Ordinary declarations become literal declarations; the value text is
//!   re-serialized from tokens (nested functions like `rgba(...)` included).
//! - A whole-value `var(--name)` becomes a theme-token reference; the part
//!   after `--` is used verbatim as the token path.
//! - `var(--name, fallback)` carries a hard-coded fallback for themes that
//!   lack the token.
//!
//! `var()` mixed with other value tokens is rejected: compound values that
//! depend on the theme belong in a computed declaration. Nested rules are
//! not declarations and are rejected as well.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, ToCss, Token,
};

use super::declaration::{DeclValue, Declaration};
use super::error::CssError;

/// Parses a CSS declaration block into declarations, in source order.
pub(crate) fn parse_declaration_block(css: &str) -> Result<Vec<Declaration>, CssError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut block_parser = BlockParser;

    let mut declarations = Vec::new();
    for item in RuleBodyParser::new(&mut parser, &mut block_parser) {
        match item {
            Ok(declaration) => declarations.push(declaration),
            Err((err, _slice)) => return Err(into_css_error(err)),
        }
    }
    Ok(declarations)
}

fn into_css_error(err: ParseError<'_, CssError>) -> CssError {
    match err.kind {
        ParseErrorKind::Custom(err) => err,
        ParseErrorKind::Basic(basic) => CssError::Parse {
            message: format!("{:?}", basic),
        },
    }
}

struct BlockParser;

impl<'i> DeclarationParser<'i> for BlockParser {
    type Declaration = Declaration;
    type Error = CssError;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, CssError>> {
        let property = name.as_ref().to_string();
        let value = parse_value(&property, input)?;
        Ok(Declaration::new(property, value))
    }
}

impl<'i> AtRuleParser<'i> for BlockParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = CssError;
}

impl<'i> QualifiedRuleParser<'i> for BlockParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = CssError;
}

impl<'i> RuleBodyItemParser<'i, Declaration, CssError> for BlockParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

fn parse_value<'i, 't>(
    property: &str,
    input: &mut Parser<'i, 't>,
) -> Result<DeclValue, ParseError<'i, CssError>> {
    let start = input.state();

    let is_var = matches!(
        input.next(),
        Ok(&Token::Function(ref name)) if name.as_ref().eq_ignore_ascii_case("var")
    );

    if is_var {
        let (path, fallback) = input.parse_nested_block(|args| parse_var_args(property, args))?;
        if input.expect_exhausted().is_err() {
            return Err(input.new_custom_error(CssError::MixedVar {
                property: property.to_string(),
            }));
        }
        return Ok(DeclValue::Token { path, fallback });
    }

    input.reset(&start);
    let text = value_text(property, input)?;
    if text.is_empty() {
        return Err(input.new_custom_error(CssError::EmptyValue {
            property: property.to_string(),
        }));
    }
    Ok(DeclValue::Literal(text))
}

fn parse_var_args<'i, 't>(
    property: &str,
    args: &mut Parser<'i, 't>,
) -> Result<(String, Option<String>), ParseError<'i, CssError>> {
    let name = args.expect_ident()?.as_ref().to_string();
    let path = match name.strip_prefix("--") {
        Some(path) => path.to_string(),
        None => {
            return Err(args.new_custom_error(CssError::InvalidVarName {
                property: property.to_string(),
                name,
            }));
        }
    };

    let fallback = if args.try_parse(|a| a.expect_comma()).is_ok() {
        Some(value_text(property, args)?)
    } else {
        None
    };

    Ok((path, fallback))
}

/// Re-serializes the remaining value tokens, recursing into nested blocks.
///
/// A `var()` seen here is by construction not the whole value, so it is
/// rejected rather than copied into the literal text.
fn value_text<'i, 't>(
    property: &str,
    input: &mut Parser<'i, 't>,
) -> Result<String, ParseError<'i, CssError>> {
    let mut out = String::new();
    loop {
        let token = match input.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        write_token(property, &token, &mut out, input)?;
    }
    Ok(out.trim().to_string())
}

fn write_token<'i, 't>(
    property: &str,
    token: &Token<'i>,
    out: &mut String,
    input: &mut Parser<'i, 't>,
) -> Result<(), ParseError<'i, CssError>> {
    if let Token::Function(name) = token {
        if name.as_ref().eq_ignore_ascii_case("var") {
            return Err(input.new_custom_error(CssError::MixedVar {
                property: property.to_string(),
            }));
        }
    }

    token.to_css(out).map_err(|_| {
        input.new_custom_error(CssError::Parse {
            message: "token serialization failed".to_string(),
        })
    })?;

    // `to_css` writes the opening of a block token; its contents and the
    // closing delimiter are ours to produce.
    let closing = match token {
        Token::Function(_) | Token::ParenthesisBlock => ')',
        Token::SquareBracketBlock => ']',
        Token::CurlyBracketBlock => '}',
        _ => return Ok(()),
    };
    let inner = input.parse_nested_block(|nested| value_text(property, nested))?;
    out.push_str(&inner);
    out.push(closing);
    Ok(())
}
