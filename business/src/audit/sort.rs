use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use crate::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortColumn {
    FirstName,
    LastName,
    Username,
}

impl SortColumn {
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Username];

    pub fn value_of(self, user: &UserRecord) -> &str {
        match self {
            Self::FirstName => &user.first_name,
            Self::LastName => &user.last_name,
            Self::Username => &user.username,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Unset,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
            Self::Unset => Self::Unset,
        }
    }
}

/// Stored direction flag per sortable column.
///
/// The flag is what the *next* click applies when it reads `Ascending`; anything else sorts
/// descending. So the first click on a fresh column sorts descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortDirectives {
    first_name: SortDirection,
    last_name: SortDirection,
    username: SortDirection,
}

impl SortDirectives {
    pub fn get(&self, column: SortColumn) -> SortDirection {
        match column {
            SortColumn::FirstName => self.first_name,
            SortColumn::LastName => self.last_name,
            SortColumn::Username => self.username,
        }
    }

    fn slot_mut(&mut self, column: SortColumn) -> &mut SortDirection {
        match column {
            SortColumn::FirstName => &mut self.first_name,
            SortColumn::LastName => &mut self.last_name,
            SortColumn::Username => &mut self.username,
        }
    }

    /// Flip `column`'s flag and return the direction to sort with now.
    pub fn toggle(&mut self, column: SortColumn) -> SortDirection {
        let applied = match self.get(column) {
            SortDirection::Ascending => SortDirection::Ascending,
            SortDirection::Unset | SortDirection::Descending => SortDirection::Descending,
        };
        *self.slot_mut(column) = applied.reversed();
        applied
    }
}

/// Root-locale Unicode collation, punctuation not ignorable.
fn collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

fn collate_lowercase(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(&a.to_lowercase(), &b.to_lowercase())
}

/// Case-folded, locale-aware text comparison used for every sortable column.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collate_lowercase(&mut collator(), a, b)
}

/// Stable sort of `users` by `column`. `Unset` leaves the order untouched.
pub fn sort_users(users: &mut [UserRecord], column: SortColumn, direction: SortDirection) {
    let mut collator = collator();
    match direction {
        SortDirection::Ascending => users.sort_by(|a, b| {
            collate_lowercase(&mut collator, column.value_of(a), column.value_of(b))
        }),
        SortDirection::Descending => users.sort_by(|a, b| {
            collate_lowercase(&mut collator, column.value_of(b), column.value_of(a))
        }),
        SortDirection::Unset => {}
    }
}
