pub mod configuration;

pub mod holiday {
    pub mod holidayerror;
    pub mod countrycode;
    pub mod holidaytypes;
    pub mod holidayspecification;
    pub mod holiday;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod processor {
    pub mod holidayspecificationprocessor;
}

pub mod provider {
    pub mod holidayprovider;
    pub mod franceholidayprovider;
    pub mod configuredholidayprovider;
    pub mod holidayprovidermanager;
}

pub mod religious {
    pub mod eastercalculator;
    pub mod feastoffsetresolver;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
    }
}
