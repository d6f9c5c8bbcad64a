//! Sample city datasets.
//!
//! Chicago and New York City carry the demographic columns; Washington does
//! not, matching the real sources.

use bikeshare_types::City;

pub const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-03-06 08:00:00,2017-03-06 08:10:00,600,Clark St & Randolph St,Canal St & Adams St,Subscriber,Male,1990.0
955915,2017-03-07 09:00:00,2017-03-07 09:20:00,1200,Clark St & Randolph St,Canal St & Adams St,Customer,,
9031,2017-01-02 10:00:00,2017-01-02 10:05:00,300,Canal St & Adams St,Clark St & Randolph St,Subscriber,Female,1985.0
304487,2017-06-05 17:30:00,2017-06-05 17:45:00,900,Streeter Dr & Grand Ave,Lake Shore Dr & Monroe St,Subscriber,Male,1990.0
45207,2017-03-13 08:15:00,2017-03-13 08:45:00,1800, Streeter Dr & Grand Ave ,Canal St & Adams St,Subscriber,Male,1961.0
";

pub const NEW_YORK_CITY: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,Broadway & W 60 St,Broadway & W 60 St,Customer,,
";

pub const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330074,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber
";

pub fn sample_for(city: City) -> &'static str {
    match city {
        City::Chicago => CHICAGO,
        City::NewYorkCity => NEW_YORK_CITY,
        City::Washington => WASHINGTON,
    }
}

/// `count` trips in March 2017, one per day, with numbered stations.
pub fn generated(count: usize) -> String {
    let mut csv = String::from(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..count {
        let day = i % 28 + 1;
        csv.push_str(&format!(
            "2017-03-{day:02} 08:00:00,2017-03-{day:02} 08:10:00,600,station-{i:03},station-{j:03},Subscriber,Female,1980.0\n",
            j = i + 1
        ));
    }
    csv
}
