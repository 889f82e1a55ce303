//! # Multi-Sentence Reassembly
//!
//! Messages longer than one NMEA sentence arrive as numbered fragments
//! sharing a sequential message id and radio channel. The [`Deframer`]
//! buffers those fragments, enforces strict arrival order, and produces the
//! complete bit vector once the final fragment lands.
//!
//! The pending-group table is bounded: a first-fragment for an occupied key
//! replaces the stale group, and when the table is full the oldest
//! incomplete group is evicted. There is no timeout; capacity is the bound.
//!
//! One `Deframer` serves one input stream. Fragments of the same group
//! racing through two threads would corrupt ordering, so concurrent feeds
//! get one instance each (or one lock around `accept`).

use crate::error::AisError;
use crate::nmea::armor;
use crate::nmea::sentence::Sentence;
use crate::util::{BitVec, BitVecBuilder, LogThrottle};
use std::collections::HashMap;

/// Default bound on simultaneously pending fragment groups.
///
/// The key space is tiny (sequence ids 0-9 on a small channel set), and a
/// healthy receiver rarely holds more than one or two groups open.
pub const DEFAULT_MAX_PENDING_GROUPS: usize = 8;

/// Outcome of feeding one sentence to the deframer.
#[derive(Debug, PartialEq, Eq)]
pub enum Reassembly {
    /// The sentence completed a message; here is its full bit vector.
    Complete(BitVec),
    /// The sentence was buffered; more fragments are outstanding.
    Pending,
}

/// Counters for monitoring a deframer instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeframerStats {
    pub fragments_accepted: u64,
    pub messages_completed: u64,
    pub groups_discarded: u64,
    pub groups_evicted: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GroupKey {
    sequence_id: Option<u8>,
    channel: Option<char>,
}

impl GroupKey {
    fn of(sentence: &Sentence) -> Self {
        Self {
            sequence_id: sentence.sequence_id,
            channel: sentence.channel,
        }
    }
}

#[derive(Debug)]
struct FragmentGroup {
    fragment_count: u8,
    /// Number of the last fragment appended so far.
    last_fragment: u8,
    builder: BitVecBuilder,
    /// Admission order, for oldest-first eviction.
    admitted: u64,
}

/// Stateful reassembler joining multi-sentence messages into bit vectors.
#[derive(Debug)]
pub struct Deframer {
    groups: HashMap<GroupKey, FragmentGroup>,
    max_pending_groups: usize,
    admissions: u64,
    stats: DeframerStats,
    warn_throttle: LogThrottle,
}

impl Deframer {
    /// Creates a deframer holding at most `max_pending_groups` incomplete
    /// groups (at least one).
    pub fn new(max_pending_groups: usize) -> Self {
        Self {
            groups: HashMap::new(),
            max_pending_groups: max_pending_groups.max(1),
            admissions: 0,
            stats: DeframerStats::default(),
            warn_throttle: LogThrottle::new(1000, 5),
        }
    }

    /// Feeds one parsed sentence in.
    ///
    /// Single-fragment sentences bypass the group table entirely and come
    /// back as [`Reassembly::Complete`] immediately. Multi-fragment
    /// sentences must arrive in strictly increasing order starting at 1;
    /// any violation discards the whole group and reports
    /// [`AisError::Reassembly`] - the group is not salvageable, and a later
    /// fragment 1 for the same key starts fresh.
    pub fn accept(&mut self, sentence: &Sentence) -> Result<Reassembly, AisError> {
        self.stats.fragments_accepted += 1;

        if sentence.is_single_fragment() {
            let bits = armor::decode_payload(&sentence.payload, sentence.fill_bits)?;
            self.stats.messages_completed += 1;
            return Ok(Reassembly::Complete(bits));
        }

        let key = GroupKey::of(sentence);
        if sentence.fragment_number == 1 {
            self.open_group(key, sentence)?;
            return Ok(Reassembly::Pending);
        }
        self.continue_group(key, sentence)
    }

    /// Number of groups currently awaiting fragments.
    pub fn pending_groups(&self) -> usize {
        self.groups.len()
    }

    /// Current reassembly statistics.
    pub fn stats(&self) -> DeframerStats {
        self.stats
    }

    /// Drops all pending groups.
    pub fn reset(&mut self) {
        self.groups.clear();
    }

    fn open_group(&mut self, key: GroupKey, sentence: &Sentence) -> Result<(), AisError> {
        if self.groups.remove(&key).is_some() {
            // A fresh first-fragment for an occupied key is an implicit
            // conflict: the stale group can never complete now.
            self.stats.groups_discarded += 1;
            if self.warn_throttle.allow() {
                log::warn!(
                    "restarting fragment group (seq {:?}, channel {:?}): new fragment 1 before completion",
                    key.sequence_id,
                    key.channel
                );
            }
        } else if self.groups.len() >= self.max_pending_groups {
            self.evict_oldest();
        }

        let mut builder = BitVecBuilder::new();
        armor::append_payload(&mut builder, &sentence.payload)?;
        self.admissions += 1;
        self.groups.insert(
            key,
            FragmentGroup {
                fragment_count: sentence.fragment_count,
                last_fragment: 1,
                builder,
                admitted: self.admissions,
            },
        );
        Ok(())
    }

    fn continue_group(
        &mut self,
        key: GroupKey,
        sentence: &Sentence,
    ) -> Result<Reassembly, AisError> {
        // Take the group out of the table; it goes back only when this
        // fragment is valid and not final. Any failure leaves it discarded.
        let Some(mut group) = self.groups.remove(&key) else {
            return Err(AisError::reassembly(
                key.sequence_id,
                key.channel,
                format!(
                    "fragment {} arrived with no preceding fragment 1",
                    sentence.fragment_number
                ),
            ));
        };

        if sentence.fragment_count != group.fragment_count {
            self.stats.groups_discarded += 1;
            return Err(AisError::reassembly(
                key.sequence_id,
                key.channel,
                format!(
                    "fragment count changed from {} to {} mid-sequence",
                    group.fragment_count, sentence.fragment_count
                ),
            ));
        }

        if sentence.fragment_number != group.last_fragment + 1 {
            self.stats.groups_discarded += 1;
            return Err(AisError::reassembly(
                key.sequence_id,
                key.channel,
                format!(
                    "fragment {} out of order, expected {}",
                    sentence.fragment_number,
                    group.last_fragment + 1
                ),
            ));
        }

        if let Err(err) = armor::append_payload(&mut group.builder, &sentence.payload) {
            // A corrupt fragment poisons the whole group.
            self.stats.groups_discarded += 1;
            return Err(err);
        }
        group.last_fragment = sentence.fragment_number;

        if group.builder.overflowed() {
            self.stats.groups_discarded += 1;
            return Err(AisError::reassembly(
                key.sequence_id,
                key.channel,
                "assembled payload exceeds maximum message size",
            ));
        }

        if !sentence.is_final_fragment() {
            self.groups.insert(key, group);
            return Ok(Reassembly::Pending);
        }

        // Fill bits are declared per sentence but only the final fragment's
        // tail is padding.
        group.builder.remove_fill_bits(sentence.fill_bits as usize);
        self.stats.messages_completed += 1;
        Ok(Reassembly::Complete(group.builder.finish()))
    }

    fn evict_oldest(&mut self) {
        if let Some(key) = self
            .groups
            .iter()
            .min_by_key(|(_, group)| group.admitted)
            .map(|(key, _)| *key)
        {
            self.groups.remove(&key);
            self.stats.groups_evicted += 1;
            if self.warn_throttle.allow() {
                log::warn!(
                    "evicting oldest incomplete fragment group (seq {:?}, channel {:?}): table full",
                    key.sequence_id,
                    key.channel
                );
            }
        }
    }
}

impl Default for Deframer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PENDING_GROUPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea::sentence::{decode_sentence, ChecksumMode};

    fn sentence(
        count: u8,
        number: u8,
        seq: &str,
        channel: &str,
        payload: &str,
        fill: u8,
    ) -> Sentence {
        let body = format!("AIVDM,{count},{number},{seq},{channel},{payload},{fill}");
        let line = format!("!{}*{:02X}", body, crate::nmea::sentence::nmea_checksum(&body));
        decode_sentence(&line, ChecksumMode::Strict).unwrap()
    }

    #[test]
    fn test_single_fragment_bypasses_table() {
        let mut deframer = Deframer::default();
        let result = deframer.accept(&sentence(1, 1, "", "A", "08", 0)).unwrap();
        let Reassembly::Complete(bits) = result else {
            panic!("expected completion");
        };
        assert_eq!(bits.len(), 12);
        assert_eq!(deframer.pending_groups(), 0);
    }

    #[test]
    fn test_two_fragments_in_order() {
        let mut deframer = Deframer::default();
        assert_eq!(
            deframer.accept(&sentence(2, 1, "3", "A", "00", 0)).unwrap(),
            Reassembly::Pending
        );
        assert_eq!(deframer.pending_groups(), 1);
        let result = deframer.accept(&sentence(2, 2, "3", "A", "w0", 2)).unwrap();
        let Reassembly::Complete(bits) = result else {
            panic!("expected completion");
        };
        // 12 bits + (12 - 2 fill) bits.
        assert_eq!(bits.len(), 22);
        assert_eq!(bits.uint(0, 12).unwrap(), 0);
        assert_eq!(bits.uint(12, 6).unwrap(), 63);
        assert_eq!(deframer.pending_groups(), 0);
        assert_eq!(deframer.stats().messages_completed, 1);
    }

    #[test]
    fn test_fragment_without_group_is_error() {
        let mut deframer = Deframer::default();
        let err = deframer.accept(&sentence(2, 2, "3", "A", "00", 2)).unwrap_err();
        assert!(matches!(
            err,
            AisError::Reassembly {
                sequence_id: Some(3),
                channel: Some('A'),
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_order_discards_group_then_restart_succeeds() {
        let mut deframer = Deframer::default();
        deframer.accept(&sentence(3, 1, "5", "B", "00", 0)).unwrap();
        let err = deframer.accept(&sentence(3, 3, "5", "B", "00", 0)).unwrap_err();
        assert!(matches!(err, AisError::Reassembly { .. }));
        assert_eq!(deframer.pending_groups(), 0);

        // A fresh fragment 1 for the same key starts over cleanly.
        assert_eq!(
            deframer.accept(&sentence(2, 1, "5", "B", "00", 0)).unwrap(),
            Reassembly::Pending
        );
        assert!(matches!(
            deframer.accept(&sentence(2, 2, "5", "B", "00", 0)).unwrap(),
            Reassembly::Complete(_)
        ));
    }

    #[test]
    fn test_duplicate_fragment_discards_group() {
        let mut deframer = Deframer::default();
        deframer.accept(&sentence(3, 1, "0", "A", "00", 0)).unwrap();
        deframer.accept(&sentence(3, 2, "0", "A", "00", 0)).unwrap();
        let err = deframer.accept(&sentence(3, 2, "0", "A", "00", 0)).unwrap_err();
        assert!(matches!(err, AisError::Reassembly { .. }));
        assert_eq!(deframer.stats().groups_discarded, 1);
    }

    #[test]
    fn test_conflicting_fragment_count_discards_group() {
        let mut deframer = Deframer::default();
        deframer.accept(&sentence(3, 1, "7", "A", "00", 0)).unwrap();
        let err = deframer.accept(&sentence(4, 2, "7", "A", "00", 0)).unwrap_err();
        assert!(matches!(err, AisError::Reassembly { .. }));
        assert_eq!(deframer.pending_groups(), 0);
    }

    #[test]
    fn test_restarted_key_discards_stale_group() {
        let mut deframer = Deframer::default();
        deframer.accept(&sentence(2, 1, "4", "A", "00", 0)).unwrap();
        // Same key, new fragment 1: stale group replaced, not an error.
        deframer.accept(&sentence(2, 1, "4", "A", "11", 0)).unwrap();
        assert_eq!(deframer.pending_groups(), 1);
        assert_eq!(deframer.stats().groups_discarded, 1);

        let Reassembly::Complete(bits) =
            deframer.accept(&sentence(2, 2, "4", "A", "22", 0)).unwrap()
        else {
            panic!("expected completion");
        };
        // Payload is the restarted group's "11", not the stale "00".
        assert_eq!(bits.uint(0, 6).unwrap(), 1);
    }

    #[test]
    fn test_capacity_eviction_drops_oldest() {
        let mut deframer = Deframer::new(2);
        deframer.accept(&sentence(2, 1, "1", "A", "00", 0)).unwrap();
        deframer.accept(&sentence(2, 1, "2", "A", "00", 0)).unwrap();
        deframer.accept(&sentence(2, 1, "3", "A", "00", 0)).unwrap();
        assert_eq!(deframer.pending_groups(), 2);
        assert_eq!(deframer.stats().groups_evicted, 1);

        // The oldest group (seq 1) is gone; its continuation now fails.
        let err = deframer.accept(&sentence(2, 2, "1", "A", "00", 0)).unwrap_err();
        assert!(matches!(err, AisError::Reassembly { .. }));
    }

    #[test]
    fn test_armor_error_poisons_group() {
        let mut deframer = Deframer::default();
        deframer.accept(&sentence(2, 1, "6", "A", "00", 0)).unwrap();
        let err = deframer.accept(&sentence(2, 2, "6", "A", "0X", 0)).unwrap_err();
        assert!(matches!(err, AisError::ArmorDecode { .. }));
        assert_eq!(deframer.pending_groups(), 0);
    }
}
