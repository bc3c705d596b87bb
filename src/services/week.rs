use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Monday of a Monday..Sunday week, the alignment key for all availability
/// data. Construction always normalizes, so holding a `WeekStart` is proof
/// the date is a canonical Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekStart(NaiveDate);

impl WeekStart {
    /// Monday of the week `date` falls in. Sundays belong to the week that
    /// started six days earlier, not to a new one.
    pub fn for_date(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        WeekStart(date - Duration::days(offset))
    }

    /// Normalizes a timestamp by its UTC calendar date.
    pub fn for_datetime(at: DateTime<Utc>) -> Self {
        Self::for_date(at.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

// Incoming dates are re-normalized rather than trusted.
impl<'de> Deserialize<'de> for WeekStart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date = NaiveDate::deserialize(deserializer)?;
        Ok(WeekStart::for_date(date))
    }
}

impl sqlx::Type<sqlx::Postgres> for WeekStart {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <NaiveDate as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for WeekStart {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <NaiveDate as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for WeekStart {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let date = <NaiveDate as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(WeekStart::for_date(date))
    }
}
