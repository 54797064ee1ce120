use chrono::Local;

/// Converts a platform timezone offset given as "minutes behind UTC,
/// positive west of UTC" into seconds ahead of UTC, positive east. A
/// UTC+2 machine reports -120 minutes and converts to 7200.
pub fn offset_seconds_from_minutes(offset_minutes: i32) -> i32 {
    offset_minutes * -60
}

/// The machine's current UTC offset in seconds, positive east of UTC.
pub fn local_offset_seconds() -> i32 {
    Local::now().offset().local_minus_utc()
}

/// A form field a timezone default can be written into.
pub trait TimezoneField {
    fn set_value(&mut self, value: &str);
}

/// A missing field swallows the write.
impl<F: TimezoneField> TimezoneField for Option<F> {
    fn set_value(&mut self, value: &str) {
        if let Some(field) = self {
            field.set_value(value);
        }
    }
}

/// Plain value holder, used by the binary and in tests.
#[derive(Debug, Default, Clone)]
pub struct ValueField {
    pub value: String,
}

impl TimezoneField for ValueField {
    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

/// Writes an offset, in seconds, as the field's value in string form.
pub fn fill_timezone<F: TimezoneField>(field: &mut F, offset_seconds: i32) {
    field.set_value(&offset_seconds.to_string());
}

/// Writes the machine's own offset as the field's default.
pub fn fill_default_timezone<F: TimezoneField>(field: &mut F) {
    fill_timezone(field, local_offset_seconds());
}
