use super::stack::STACK_LIMIT;

/// The sequence glibc `rand()` produces with its default seed.
pub const RANDOM_NUMBERS: [f64; 23] = [
    1804289383.0,
    846930886.0,
    1681692777.0,
    1714636915.0,
    1957747793.0,
    424238335.0,
    719885386.0,
    1649760492.0,
    596516649.0,
    1189641421.0,
    1025202362.0,
    1350490027.0,
    783368690.0,
    1102520059.0,
    2044897763.0,
    1967513926.0,
    1365180540.0,
    1540383426.0,
    304089172.0,
    1303455736.0,
    35005211.0,
    521595368.0,
    1804289383.0,
];

/// Position in `RANDOM_NUMBERS` of the next draw.
///
/// The cursor runs from 0 to `STACK_LIMIT` inclusive before wrapping, so a
/// full cycle is 24 draws. The extra position reads past the table and
/// lands back on its first entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RandomCursor {
    index: usize,
}

impl RandomCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> f64 {
        RANDOM_NUMBERS[self.index % RANDOM_NUMBERS.len()]
    }

    /// Called only after the drawn value made it onto the stack.
    pub fn advance(&mut self) {
        self.index += 1;
        if self.index > STACK_LIMIT {
            log::trace!("random cursor wrapped");
            self.index = 0;
        }
    }
}
