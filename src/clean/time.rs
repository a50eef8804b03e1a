/// Format minutes since midnight as `HH:MM`.
///
/// Values of 1440 and above wrap onto the next day. Absent or negative input
/// means "no time" (an origin stop has no arrival) and yields `None`.
pub fn minutes_to_time(minutes: Option<i64>) -> Option<String> {
    let minutes = minutes.filter(|m| *m >= 0)?;
    let hour = (minutes / 60) % 24;
    let minute = minutes % 60;
    Some(format!("{:02}:{:02}", hour, minute))
}
