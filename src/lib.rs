pub mod configuration;

pub mod holiday {
    pub mod holidayerror;
    pub mod holidaykind;
    pub mod holiday;
    pub mod observancerule;
    pub mod holidays;
    pub mod holidayset;
    pub mod suppressedholidayset;
    pub mod holidayprofile;
}

pub mod logging;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod holidayrule;
    }
}
