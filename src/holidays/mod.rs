//! Ecuadorian public holidays.
//!
//! This module contains the local holiday calendar (fixed dates, the Easter
//! anchored holidays and the weekday bridging rules), the remote holiday
//! client and the [`HolidaySource`] that unifies both.

mod bridging;
mod calculator;
mod easter;
mod remote;
mod source;

pub use bridging::{LAST_UNBRIDGED_YEAR, NovemberPair, bridged_date, november_pair};
pub use calculator::{
    BATTLE_OF_PICHINCHA, CARNIVAL_MONDAY, CARNIVAL_TUESDAY, CHRISTMAS_DAY, DAY_OF_THE_DEAD,
    EASTER_SUNDAY, FIRST_CRY_OF_INDEPENDENCE, FOUNDATION_OF_QUITO, GOOD_FRIDAY, HolidayCalculator,
    HolidayCalendar, INDEPENDENCE_OF_CUENCA, INDEPENDENCE_OF_GUAYAQUIL, LABOUR_DAY, NEW_YEARS_DAY,
};
pub use easter::{EASTER_YEARS, easter_sunday};
pub use remote::{EXCLUDED_OBSERVANCES, RemoteHolidayClient, RemoteSettings};
pub use source::HolidaySource;
