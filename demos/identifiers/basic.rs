//! Identifier Scanner Example
//!
//! Splits source text into identifiers, numbers, whitespace and punctuation
//! using nothing but character sets and the single-unit `Parser` contract.
//!
//! Run with: cargo run --example identifiers

use chset::charset::constants::{ALPHA, DIGIT, WHITESPACE};
use chset::{Charset, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Identifier,
    Number,
    Space,
    Punct,
}

/// Consume as many units as `p` accepts, starting at `pos`
fn repeat<P: Parser<()>>(p: &P, buf: &[char], mut pos: usize) -> usize {
    while let Some(n) = p.parse(buf, pos, buf.len(), &mut ()) {
        pos += n;
    }
    pos
}

fn tokenize(input: &str) -> Vec<(Kind, String)> {
    let ident_start = &*ALPHA | &Charset::from_char('_');
    let ident_rest = &ident_start | &*DIGIT;

    let buf: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < buf.len() {
        let (kind, end) = if ident_start.parse(&buf, pos, buf.len(), &mut ()).is_some() {
            (Kind::Identifier, repeat(&ident_rest, &buf, pos + 1))
        } else if DIGIT.parse(&buf, pos, buf.len(), &mut ()).is_some() {
            (Kind::Number, repeat(&*DIGIT, &buf, pos))
        } else if WHITESPACE.parse(&buf, pos, buf.len(), &mut ()).is_some() {
            (Kind::Space, repeat(&*WHITESPACE, &buf, pos))
        } else {
            (Kind::Punct, pos + 1)
        };
        tokens.push((kind, buf[pos..end].iter().collect()));
        pos = end;
    }

    tokens
}

fn main() {
    let input = "let total_2 = price * 100;";
    println!("Input: {:?}", input);
    println!();

    for (kind, text) in tokenize(input) {
        if kind != Kind::Space {
            println!("{:<12} {:?}", format!("{:?}", kind), text);
        }
    }
}
