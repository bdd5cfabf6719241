/// Policy for handling a write to a key that already holds a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePolicy {
	/// Keep the first record seen for a key.
	FirstWins,
	/// Overwrite with the last record seen.
	LastWins,
}

impl WritePolicy {
	/// Decides what a write does given whether the key is occupied.
	#[inline]
	pub fn action_for(self, occupied: bool) -> InsertAction {
		match (occupied, self) {
			(false, _) => InsertAction::InsertedNew,
			(true, WritePolicy::FirstWins) => InsertAction::KeptExisting,
			(true, WritePolicy::LastWins) => InsertAction::ReplacedExisting,
		}
	}
}

/// Outcome of a single write.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Key was new; record inserted.
	InsertedNew,
	/// Key existed; kept the existing record.
	KeptExisting,
	/// Key existed; replaced with the new record.
	ReplacedExisting,
}

impl InsertAction {
	/// Returns true if the new record is now stored.
	#[inline]
	pub fn stores_new(self) -> bool {
		!matches!(self, InsertAction::KeptExisting)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(WritePolicy::FirstWins, false, InsertAction::InsertedNew)]
	#[case(WritePolicy::FirstWins, true, InsertAction::KeptExisting)]
	#[case(WritePolicy::LastWins, false, InsertAction::InsertedNew)]
	#[case(WritePolicy::LastWins, true, InsertAction::ReplacedExisting)]
	fn action_for_occupancy(
		#[case] policy: WritePolicy,
		#[case] occupied: bool,
		#[case] expected: InsertAction,
	) {
		assert_eq!(policy.action_for(occupied), expected);
	}

	#[test]
	fn only_kept_skips_store() {
		assert!(InsertAction::InsertedNew.stores_new());
		assert!(InsertAction::ReplacedExisting.stores_new());
		assert!(!InsertAction::KeptExisting.stores_new());
	}
}
