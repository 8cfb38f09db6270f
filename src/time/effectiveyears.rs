/// Inclusive window of years a holiday law is in force for.
/// `last == None` means the rule has not been superseded.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EffectiveYears {
    first: i32,
    last: Option<i32>
}

impl EffectiveYears {
    pub const fn since(first: i32) -> EffectiveYears {
        EffectiveYears { first, last: None }
    }

    pub const fn between(first: i32, last: i32) -> EffectiveYears {
        if first > last {
            EffectiveYears { first: last, last: Some(first) }
        } else {
            EffectiveYears { first, last: Some(last) }
        }
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> Option<i32> {
        self.last
    }

    pub fn contain(&self, year: i32) -> bool {
        year >= self.first && self.last.is_none_or(|last| year <= last)
    }
}
