use crate::member::Member;

/// Returns true if the member's email contains `query`, ignoring case.
///
/// An empty query matches every member.
pub fn matches(member: &Member, query: &str) -> bool {
	query.is_empty() || member.email.to_lowercase().contains(&query.to_lowercase())
}

/// Editable search text with its lowercased form kept alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	text: String,
	needle: String,
}

impl Query {
	/// Creates a query from existing text.
	pub fn new(text: impl Into<String>) -> Self {
		let text = text.into();
		let needle = text.to_lowercase();
		Self { text, needle }
	}

	/// The text as typed.
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// Returns true if nothing has been typed.
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Replaces the whole text.
	pub fn set(&mut self, text: &str) {
		text.clone_into(&mut self.text);
		self.refresh();
	}

	/// Appends a character.
	pub fn push(&mut self, ch: char) {
		self.text.push(ch);
		self.refresh();
	}

	/// Removes the last character. Returns false if the query was already empty.
	pub fn pop(&mut self) -> bool {
		let popped = self.text.pop().is_some();
		if popped {
			self.refresh();
		}
		popped
	}

	/// Clears the text.
	pub fn clear(&mut self) {
		self.text.clear();
		self.needle.clear();
	}

	/// Same test as [`matches`], reusing the cached lowercase needle.
	pub fn matches(&self, member: &Member) -> bool {
		self.needle.is_empty() || member.email.to_lowercase().contains(&self.needle)
	}

	fn refresh(&mut self) {
		self.needle = self.text.to_lowercase();
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;
	use crate::member::MemberId;

	fn member(email: &str) -> Member {
		Member::new(MemberId::new(1), "Test", email)
	}

	#[rstest]
	#[case("artem@gmail.com", "", true)]
	#[case("artem@gmail.com", "art", true)]
	#[case("artem@gmail.com", "ARTEM@", true)]
	#[case("Lenkan@Gmail.com", "lenkan@gmail", true)]
	#[case("artem@gmail.com", "lena", false)]
	#[case("a@x.com", "a@", true)]
	#[case("b@y.com", "a@", false)]
	fn email_substring_match(#[case] email: &str, #[case] query: &str, #[case] expected: bool) {
		assert_eq!(matches(&member(email), query), expected);
		assert_eq!(Query::new(query).matches(&member(email)), expected);
	}

	#[test]
	fn name_is_not_searched() {
		let m = Member::new(MemberId::new(1), "Artem", "someone@gmail.com");
		assert!(!matches(&m, "artem"));
	}

	#[test]
	fn editing_keeps_needle_in_sync() {
		let mut query = Query::default();
		for ch in "LEN".chars() {
			query.push(ch);
		}
		assert_eq!(query.as_str(), "LEN");
		assert!(query.matches(&member("lenkan@gmail.com")));

		assert!(query.pop());
		query.push('X');
		assert!(!query.matches(&member("lenkan@gmail.com")));

		query.clear();
		assert!(!query.pop());
		assert!(query.matches(&member("anyone@example.com")));
	}

	proptest! {
		#[test]
		fn prop_matches_is_lowercase_containment(email in "[a-zA-Z@.]{0,16}", query in "[a-zA-Z@.]{0,4}") {
			let expected = query.is_empty() || email.to_lowercase().contains(&query.to_lowercase());
			prop_assert_eq!(matches(&member(&email), &query), expected);
			prop_assert_eq!(Query::new(query.as_str()).matches(&member(&email)), expected);
		}
	}
}
