/// Identifies one availability fetch.
///
/// `epoch` changes every time the loop is (re)started for a district;
/// `seq` increases with every fetch the loop issues, across epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub epoch: u64,
    pub seq: u64,
}

impl FetchTicket {
    /// Whether a result carrying this ticket may replace data applied from
    /// `applied_seq` while `current_epoch` is active.
    pub fn is_fresh(&self, current_epoch: u64, applied_seq: u64) -> bool {
        self.epoch == current_epoch && self.seq > applied_seq
    }
}
