use crate::custom_error::AocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Forward(u32),
    Down(u32),
    Up(u32),
}

impl Instruction {
    /// Builds an instruction from its direction word, `None` if the word is unknown.
    pub fn new(direction: &str, amount: u32) -> Option<Self> {
        match direction {
            "forward" => Some(Self::Forward(amount)),
            "down" => Some(Self::Down(amount)),
            "up" => Some(Self::Up(amount)),
            _ => None,
        }
    }
}

/// Where the submarine ends up when `down` and `up` move it directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub horizontal: i128,
    pub depth: i128,
}

impl Position {
    /// `None` when a coordinate would leave the `i128` range.
    pub fn apply(self, instruction: &Instruction) -> Option<Self> {
        Some(match *instruction {
            Instruction::Forward(amount) => Self {
                horizontal: self.horizontal.checked_add(i128::from(amount))?,
                ..self
            },
            Instruction::Down(amount) => Self {
                depth: self.depth.checked_add(i128::from(amount))?,
                ..self
            },
            Instruction::Up(amount) => Self {
                depth: self.depth.checked_sub(i128::from(amount))?,
                ..self
            },
        })
    }

    /// Folds the course, in order, starting from the surface at (0, 0).
    pub fn fold<'a>(
        instructions: impl IntoIterator<Item = &'a Instruction>,
    ) -> Result<Self, AocError> {
        instructions.into_iter().enumerate().try_fold(
            Self::default(),
            |position, (index, instruction)| {
                position
                    .apply(instruction)
                    .ok_or_else(|| AocError::overflow(format!("at course step {}", index + 1)))
            },
        )
    }

    pub fn answer(&self) -> Result<i128, AocError> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or_else(|| AocError::overflow("multiplying the final position"))
    }
}

/// Same course read the other way: `down` and `up` only tilt the aim,
/// and `forward` dives by `aim * amount` while moving ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AimedPosition {
    pub horizontal: i128,
    pub depth: i128,
    pub aim: i128,
}

impl AimedPosition {
    pub fn apply(self, instruction: &Instruction) -> Option<Self> {
        Some(match *instruction {
            Instruction::Forward(amount) => {
                let amount = i128::from(amount);
                Self {
                    horizontal: self.horizontal.checked_add(amount)?,
                    depth: self.depth.checked_add(self.aim.checked_mul(amount)?)?,
                    ..self
                }
            }
            Instruction::Down(amount) => Self {
                aim: self.aim.checked_add(i128::from(amount))?,
                ..self
            },
            Instruction::Up(amount) => Self {
                aim: self.aim.checked_sub(i128::from(amount))?,
                ..self
            },
        })
    }

    pub fn fold<'a>(
        instructions: impl IntoIterator<Item = &'a Instruction>,
    ) -> Result<Self, AocError> {
        instructions.into_iter().enumerate().try_fold(
            Self::default(),
            |position, (index, instruction)| {
                position
                    .apply(instruction)
                    .ok_or_else(|| AocError::overflow(format!("at course step {}", index + 1)))
            },
        )
    }

    pub fn answer(&self) -> Result<i128, AocError> {
        self.horizontal
            .checked_mul(self.depth)
            .ok_or_else(|| AocError::overflow("multiplying the final position"))
    }
}
