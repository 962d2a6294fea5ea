pub mod account;
pub mod browse;
pub mod detail;
pub mod history;
pub mod home;
pub mod my_list;
pub mod profile;
pub mod search;

use serde::Serialize;

use crate::output::Output;

/// Mutations confirm with a message for humans and emit the resulting record
/// in the JSON modes so scripts get the updated state back.
pub(crate) fn confirm<T: Serialize>(output: &Output, record: &T, msg: impl AsRef<str>) {
    if output.is_human() {
        output.success(msg);
    } else {
        output.view(record, || {});
    }
}
