// Recursive-descent parser for SVG path data.
//
// Every rule either succeeds and advances `pos`, or fails and leaves `pos` where it was. Failures
// are recorded at the furthest offset reached so the error points at the real problem rather than
// at the start of the command that could not be completed.

use crate::command::{CommandArgs, PathCommand};
use crate::error::{Expectation, GrammarError, Result};

const WSP: Expectation = Expectation::Class("[ \\t\\n\\r]");
const DIGIT: Expectation = Expectation::Class("[0-9]");
const SIGN: Expectation = Expectation::Class("[+\\-]");
const EXPONENT: Expectation = Expectation::Class("[eE]");
const FLAG: Expectation = Expectation::Class("[01]");
const COMMA: Expectation = Expectation::Literal(',');
const DOT: Expectation = Expectation::Literal('.');

/// Parses SVG path data into commands, in input order.
///
/// Repeated argument groups after one letter become one command each, and extra coordinate pairs
/// after a moveto become implicit linetos (`L` after `M`, `l` after `m`). A leading `m` is read as
/// an absolute `M`. Empty or whitespace-only input yields no commands.
pub fn parse(input: &str) -> Result<Vec<PathCommand>> {
    Parser::new(input).svg_path()
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    max_fail_pos: usize,
    max_fail_expected: Vec<Expectation>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            max_fail_pos: 0,
            max_fail_expected: Vec::new(),
        }
    }

    fn svg_path(mut self) -> Result<Vec<PathCommand>> {
        self.skip_wsp();
        let mut commands = self.command_groups().unwrap_or_default();
        self.skip_wsp();

        if self.pos < self.bytes.len() {
            self.fail(Expectation::EndOfInput);
            return Err(GrammarError::new(
                self.input,
                self.max_fail_pos,
                self.max_fail_expected,
            ));
        }

        if let Some(first) = commands.first_mut() {
            if first.code == 'm' {
                first.code = 'M';
                first.relative = false;
            }
        }
        Ok(commands)
    }

    fn fail(&mut self, expectation: Expectation) {
        if self.pos < self.max_fail_pos {
            return;
        }
        if self.pos > self.max_fail_pos {
            self.max_fail_pos = self.pos;
            self.max_fail_expected.clear();
        }
        self.max_fail_expected.push(expectation);
    }

    fn byte_if(&mut self, pred: impl Fn(u8) -> bool, expectation: Expectation) -> Option<u8> {
        match self.bytes.get(self.pos) {
            Some(&b) if pred(b) => {
                self.pos += 1;
                Some(b)
            }
            _ => {
                self.fail(expectation);
                None
            }
        }
    }

    fn letter(&mut self, upper: u8, expectation: &'static str) -> Option<char> {
        let lower = upper.to_ascii_lowercase();
        self.byte_if(|b| b == upper || b == lower, Expectation::Class(expectation))
            .map(char::from)
    }

    fn wsp(&mut self) -> Option<()> {
        self.byte_if(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'), WSP)
            .map(|_| ())
    }

    fn skip_wsp(&mut self) {
        while self.wsp().is_some() {}
    }

    fn comma(&mut self) -> Option<()> {
        self.byte_if(|b| b == b',', COMMA).map(|_| ())
    }

    /// `wsp+ ","? wsp*` or `"," wsp*`.
    fn comma_wsp(&mut self) -> Option<()> {
        if self.wsp().is_some() {
            self.skip_wsp();
            let _ = self.comma();
            self.skip_wsp();
            return Some(());
        }
        self.comma()?;
        self.skip_wsp();
        Some(())
    }

    fn digit_sequence(&mut self) -> Option<()> {
        self.byte_if(|b| b.is_ascii_digit(), DIGIT)?;
        while self.byte_if(|b| b.is_ascii_digit(), DIGIT).is_some() {}
        Some(())
    }

    fn sign(&mut self) -> Option<()> {
        self.byte_if(|b| matches!(b, b'+' | b'-'), SIGN).map(|_| ())
    }

    fn exponent(&mut self) -> Option<()> {
        let save = self.pos;
        let parsed = self
            .byte_if(|b| matches!(b, b'e' | b'E'), EXPONENT)
            .and_then(|_| {
                let _ = self.sign();
                self.digit_sequence()
            });
        if parsed.is_none() {
            self.pos = save;
        }
        parsed
    }

    /// `digits? "." digits` or `digits "."`.
    fn fractional_constant(&mut self) -> Option<()> {
        let save = self.pos;
        let _ = self.digit_sequence();
        if self.byte_if(|b| b == b'.', DOT).is_some() && self.digit_sequence().is_some() {
            return Some(());
        }
        self.pos = save;

        if self.digit_sequence().is_some() && self.byte_if(|b| b == b'.', DOT).is_some() {
            return Some(());
        }
        self.pos = save;
        None
    }

    /// `fractional_constant exponent?` or `digits exponent`.
    fn floating_point_constant(&mut self) -> Option<()> {
        if self.fractional_constant().is_some() {
            let _ = self.exponent();
            return Some(());
        }

        let save = self.pos;
        if self.digit_sequence().is_some() && self.exponent().is_some() {
            return Some(());
        }
        self.pos = save;
        None
    }

    fn text_to_number(&self, start: usize) -> Option<f64> {
        self.input.get(start..self.pos)?.parse::<f64>().ok()
    }

    fn number(&mut self) -> Option<f64> {
        let start = self.pos;

        let _ = self.sign();
        if self.floating_point_constant().is_some() {
            return self.text_to_number(start);
        }
        self.pos = start;

        let _ = self.sign();
        if self.digit_sequence().is_some() {
            return self.text_to_number(start);
        }
        self.pos = start;
        None
    }

    fn nonnegative_number(&mut self) -> Option<f64> {
        let start = self.pos;
        if self.floating_point_constant().is_some() || self.digit_sequence().is_some() {
            return self.text_to_number(start);
        }
        None
    }

    fn flag(&mut self) -> Option<bool> {
        self.byte_if(|b| matches!(b, b'0' | b'1'), FLAG)
            .map(|b| b == b'1')
    }

    /// Runs `rule`, rewinding to the starting offset when it fails.
    fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let save = self.pos;
        let out = rule(self);
        if out.is_none() {
            self.pos = save;
        }
        out
    }

    fn coordinate_pair(&mut self) -> Option<(f64, f64)> {
        self.attempt(|p| {
            let x = p.number()?;
            let _ = p.comma_wsp();
            let y = p.number()?;
            Some((x, y))
        })
    }

    /// `item (comma_wsp? item)*`
    fn sequence<T>(&mut self, item: fn(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let mut out = vec![item(self)?];
        loop {
            let next = self.attempt(|p| {
                let _ = p.comma_wsp();
                item(p)
            });
            match next {
                Some(v) => out.push(v),
                None => break,
            }
        }
        Some(out)
    }

    fn curveto_argument(&mut self) -> Option<CommandArgs> {
        self.attempt(|p| {
            let (x1, y1) = p.coordinate_pair()?;
            let _ = p.comma_wsp();
            let (x2, y2) = p.coordinate_pair()?;
            let _ = p.comma_wsp();
            let (x, y) = p.coordinate_pair()?;
            Some(CommandArgs::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            })
        })
    }

    fn smooth_curveto_argument(&mut self) -> Option<CommandArgs> {
        self.attempt(|p| {
            let (x2, y2) = p.coordinate_pair()?;
            let _ = p.comma_wsp();
            let (x, y) = p.coordinate_pair()?;
            Some(CommandArgs::SmoothCurveTo { x2, y2, x, y })
        })
    }

    fn quadratic_curveto_argument(&mut self) -> Option<CommandArgs> {
        self.attempt(|p| {
            let (x1, y1) = p.coordinate_pair()?;
            let _ = p.comma_wsp();
            let (x, y) = p.coordinate_pair()?;
            Some(CommandArgs::QuadraticCurveTo { x1, y1, x, y })
        })
    }

    fn smooth_quadratic_curveto_argument(&mut self) -> Option<CommandArgs> {
        let (x, y) = self.coordinate_pair()?;
        Some(CommandArgs::SmoothQuadraticCurveTo { x, y })
    }

    /// `rx ry rotation flag flag x y`; the rotation must be followed by a separator, the flags
    /// need not be (`"1 1 0 0010 10"` is valid).
    fn elliptical_arc_argument(&mut self) -> Option<CommandArgs> {
        self.attempt(|p| {
            let rx = p.nonnegative_number()?;
            let _ = p.comma_wsp();
            let ry = p.nonnegative_number()?;
            let _ = p.comma_wsp();
            let x_axis_rotation = p.number()?;
            p.comma_wsp()?;
            let large_arc = p.flag()?;
            let _ = p.comma_wsp();
            let sweep = p.flag()?;
            let _ = p.comma_wsp();
            let (x, y) = p.coordinate_pair()?;
            Some(CommandArgs::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            })
        })
    }

    fn lineto_argument(&mut self) -> Option<CommandArgs> {
        let (x, y) = self.coordinate_pair()?;
        Some(CommandArgs::LineTo { x, y })
    }

    fn horizontal_lineto_argument(&mut self) -> Option<CommandArgs> {
        let x = self.number()?;
        Some(CommandArgs::HorizontalLineTo { x })
    }

    fn vertical_lineto_argument(&mut self) -> Option<CommandArgs> {
        let y = self.number()?;
        Some(CommandArgs::VerticalLineTo { y })
    }

    fn moveto(&mut self) -> Option<Vec<PathCommand>> {
        self.attempt(|p| {
            let code = p.letter(b'M', "[Mm]")?;
            p.skip_wsp();
            let (x, y) = p.coordinate_pair()?;

            let mut out = vec![PathCommand::new(code, CommandArgs::MoveTo { x, y })];
            let implicit = p.attempt(|p| {
                let _ = p.comma_wsp();
                p.sequence(Self::lineto_argument)
            });
            if let Some(linetos) = implicit {
                let line_code = if code == 'M' { 'L' } else { 'l' };
                out.extend(
                    linetos
                        .into_iter()
                        .map(|args| PathCommand::new(line_code, args)),
                );
            }
            Some(out)
        })
    }

    /// One command letter followed by one or more argument groups.
    fn repeated(
        &mut self,
        upper: u8,
        expectation: &'static str,
        argument: fn(&mut Self) -> Option<CommandArgs>,
    ) -> Option<Vec<PathCommand>> {
        self.attempt(|p| {
            let code = p.letter(upper, expectation)?;
            p.skip_wsp();
            let args = p.sequence(argument)?;
            Some(
                args.into_iter()
                    .map(|args| PathCommand::new(code, args))
                    .collect(),
            )
        })
    }

    fn drawto_command(&mut self) -> Option<Vec<PathCommand>> {
        if self.letter(b'Z', "[Zz]").is_some() {
            return Some(vec![PathCommand::new('Z', CommandArgs::ClosePath)]);
        }

        let rules: [(u8, &'static str, fn(&mut Self) -> Option<CommandArgs>); 8] = [
            (b'L', "[Ll]", Self::lineto_argument),
            (b'H', "[Hh]", Self::horizontal_lineto_argument),
            (b'V', "[Vv]", Self::vertical_lineto_argument),
            (b'C', "[Cc]", Self::curveto_argument),
            (b'S', "[Ss]", Self::smooth_curveto_argument),
            (b'Q', "[Qq]", Self::quadratic_curveto_argument),
            (b'T', "[Tt]", Self::smooth_quadratic_curveto_argument),
            (b'A', "[Aa]", Self::elliptical_arc_argument),
        ];
        for (upper, expectation, argument) in rules {
            if let Some(commands) = self.repeated(upper, expectation, argument) {
                return Some(commands);
            }
        }
        None
    }

    /// `moveto (wsp* drawto_command)*`
    fn command_group(&mut self) -> Option<Vec<PathCommand>> {
        let mut out = self.moveto()?;
        while let Some(more) = self.attempt(|p| {
            p.skip_wsp();
            p.drawto_command()
        }) {
            out.extend(more);
        }
        Some(out)
    }

    /// `command_group (wsp* command_group)*`
    fn command_groups(&mut self) -> Option<Vec<PathCommand>> {
        let mut out = self.command_group()?;
        while let Some(more) = self.attempt(|p| {
            p.skip_wsp();
            p.command_group()
        }) {
            out.extend(more);
        }
        Some(out)
    }
}
