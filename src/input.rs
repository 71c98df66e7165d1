use aho_corasick::{AhoCorasick, BuildError, MatchKind};
use lib_2048::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

const ARROW_KEYS: [(&[u8], Direction); 4] = [
    (b"\x1b[A", Direction::Up),
    (b"\x1b[B", Direction::Down),
    (b"\x1b[C", Direction::Right),
    (b"\x1b[D", Direction::Left),
];

const MOVE_KEYS: &str = "wWsSdDaA";

const OTHER_KEYS: [(u8, Command); 4] = [
    (b'r', Command::Restart),
    (b'R', Command::Restart),
    (b'q', Command::Quit),
    (b'Q', Command::Quit),
];

/// Turns raw terminal bytes into commands. An escape sequence split across reads is held back
/// until the rest arrives.
pub struct KeyDecoder {
    searcher: AhoCorasick,
    commands: Vec<Command>,
    pending: Vec<u8>,
}

impl KeyDecoder {
    pub fn new() -> Result<Self, BuildError> {
        let mut patterns: Vec<Vec<u8>> = Vec::new();
        let mut commands = Vec::new();

        for (sequence, direction) in ARROW_KEYS {
            patterns.push(sequence.to_vec());
            commands.push(Command::Move(direction));
        }

        for key in MOVE_KEYS.chars() {
            if let Some(direction) = Direction::from_key(key) {
                patterns.push(vec![key as u8]);
                commands.push(Command::Move(direction));
            }
        }

        for (key, command) in OTHER_KEYS {
            patterns.push(vec![key]);
            commands.push(command);
        }

        // Leftmost-first so `ESC [ A` is read as an arrow rather than a bare `A`.
        let searcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&patterns)?;

        Ok(Self {
            searcher,
            commands,
            pending: Vec::new(),
        })
    }

    pub fn feed(&mut self, input: &[u8]) -> Vec<Command> {
        self.pending.extend_from_slice(input);

        let commands = self
            .searcher
            .find_iter(&self.pending)
            .map(|m| self.commands[m.pattern().as_usize()])
            .collect();

        let keep = match self.pending.as_slice() {
            [.., 0x1b, b'['] => 2,
            [.., 0x1b] => 1,
            _ => 0,
        };
        let consumed = self.pending.len() - keep;
        self.pending.drain(..consumed);

        commands
    }
}
