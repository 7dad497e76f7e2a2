use crate::command::{AbsoluteCommand, CommandArgs, PathCommand};

/// Rewrites relative commands into absolute coordinates.
///
/// Walks the commands in order with a current point starting at the origin. Relative commands get
/// the current point added to each positional field; every command is stamped with the point it
/// starts from (`x0`, `y0`); a command without its own `x` or `y` (`H`, `V`, `Z`) inherits it from
/// the current point; `Z` ends at the most recent moveto target rather than at the current point.
pub fn make_absolute(commands: &[PathCommand]) -> Vec<AbsoluteCommand> {
    let mut current = (0.0, 0.0);
    let mut subpath_start: Option<(f64, f64)> = None;

    commands
        .iter()
        .map(|cmd| {
            let (x0, y0) = current;
            let args = if cmd.relative {
                cmd.args.translated(x0, y0)
            } else {
                cmd.args
            };

            let (x, y) = match args {
                CommandArgs::ClosePath => subpath_start.unwrap_or(current),
                _ => (args.x().unwrap_or(x0), args.y().unwrap_or(y0)),
            };
            if let CommandArgs::MoveTo { .. } = args {
                subpath_start = Some((x, y));
            }
            current = (x, y);

            AbsoluteCommand {
                code: cmd.code.to_ascii_uppercase(),
                args,
                x0,
                y0,
                x,
                y,
            }
        })
        .collect()
}

/// [`crate::parse`] followed by [`make_absolute`].
pub fn parse_absolute(input: &str) -> crate::Result<Vec<AbsoluteCommand>> {
    Ok(make_absolute(&crate::parse(input)?))
}
