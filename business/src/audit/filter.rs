use crate::UserRecord;

/// `needle` must already be lowercased.
pub fn matches_search(user: &UserRecord, needle: &str) -> bool {
    user.full_name().to_lowercase().contains(needle)
        || user.username.to_lowercase().contains(needle)
}

/// Records whose full name or username contains `search`, case-insensitively, in input order.
///
/// An empty search matches everything.
pub fn filter_users<'a>(users: &'a [UserRecord], search: &str) -> Vec<&'a UserRecord> {
    if search.is_empty() {
        return users.iter().collect();
    }

    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| matches_search(user, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::UserId;

    fn user(id: u64, first: &str, last: &str, username: &str) -> UserRecord {
        UserRecord {
            id: id.into(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            username: username.to_owned(),
            created_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            user(1, "Jane", "Smith", "jsmith"),
            user(2, "John", "Doe", "jdoe"),
            user(3, "Anna", "Smithers", "anna"),
            user(4, "Mark", "Twain", "mt"),
        ]
    }

    fn ids(users: &[&UserRecord]) -> Vec<UserId> {
        users.iter().map(|u| u.id.clone()).collect()
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_over_full_name() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "SMITH")), vec![1, 3]);
    }

    #[test]
    fn search_spans_first_and_last_name() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "n d")), vec![2]);
        assert_eq!(ids(&filter_users(&users, "jane smith")), vec![1]);
    }

    #[test]
    fn search_matches_username() {
        let users = sample();
        assert_eq!(ids(&filter_users(&users, "mt")), vec![4]);
    }

    #[test]
    fn no_match_yields_empty() {
        let users = sample();
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn returned_and_rejected_records_agree_with_predicate() {
        let users = sample();
        for query in ["a", "Smi", "oh", "DOE", "x", " "] {
            let needle = query.to_lowercase();
            let kept = ids(&filter_users(&users, query));
            for user in &users {
                assert_eq!(
                    kept.contains(&user.id),
                    matches_search(user, &needle),
                    "query {query:?} disagrees on user {}",
                    user.id
                );
            }
        }
    }
}
