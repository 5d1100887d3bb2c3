//! Precomputed sectional-term boundaries, 1900–2050, Korean Standard Time.
//!
//! Each row is one civil year; the 12 cells are `(month, day, hour, minute)`
//! in civil order: Sohan (285°), Ipchun (315°), Gyeongchip (345°),
//! Cheongmyeong (15°), Ipha (45°), Mangjong (75°), Soseo (105°),
//! Ipchu (135°), Baengno (165°), Hallo (195°), Ipdong (225°), Daeseol (255°).
//!
//! Generated from the series in [`crate::sun`] with ΔT applied, rounded to
//! the nearest minute. The table is a cache of that series: inside its range
//! it matches [`crate::AlgorithmicSolarTerms`] to the minute, and it exists
//! so lookups skip the root search.

/// First civil year covered by [`SOLAR_TERM_TABLE`].
pub const TABLE_FIRST_YEAR: i32 = 1900;

/// Last civil year covered by [`SOLAR_TERM_TABLE`].
pub const TABLE_LAST_YEAR: i32 = 2050;

#[rustfmt::skip]
pub(crate) static SOLAR_TERM_TABLE: [[(u8, u8, u8, u8); 12]; 151] = [
    [(1, 6, 3, 4), (2, 4, 14, 52), (3, 6, 9, 22), (4, 5, 14, 53), (5, 6, 8, 55), (6, 6, 13, 39), (7, 8, 0, 10), (8, 8, 9, 51), (9, 8, 12, 17), (10, 9, 3, 13), (11, 8, 5, 40), (12, 7, 21, 56)], // 1900
    [(1, 6, 8, 53), (2, 4, 20, 40), (3, 6, 15, 11), (4, 5, 20, 45), (5, 6, 14, 51), (6, 6, 19, 37), (7, 8, 6, 8), (8, 8, 15, 46), (9, 8, 18, 10), (10, 9, 9, 7), (11, 8, 11, 35), (12, 8, 3, 53)], // 1901
    [(1, 6, 14, 52), (2, 5, 2, 38), (3, 6, 21, 8), (4, 6, 2, 38), (5, 6, 20, 39), (6, 7, 1, 20), (7, 8, 11, 46), (8, 8, 21, 22), (9, 8, 23, 47), (10, 9, 14, 45), (11, 8, 17, 18), (12, 8, 9, 41)], // 1902
    [(1, 6, 20, 44), (2, 5, 8, 31), (3, 7, 2, 59), (4, 6, 8, 26), (5, 7, 2, 26), (6, 7, 7, 7), (7, 8, 17, 37), (8, 9, 3, 16), (9, 9, 5, 42), (10, 9, 20, 42), (11, 8, 23, 13), (12, 8, 15, 35)], // 1903
    [(1, 7, 2, 37), (2, 5, 14, 24), (3, 6, 8, 52), (4, 5, 14, 19), (5, 6, 8, 19), (6, 6, 13, 1), (7, 7, 23, 32), (8, 8, 9, 12), (9, 8, 11, 38), (10, 9, 2, 36), (11, 8, 5, 5), (12, 7, 21, 25)], // 1904
    [(1, 6, 8, 27), (2, 4, 20, 16), (3, 6, 14, 46), (4, 5, 20, 15), (5, 6, 14, 14), (6, 6, 18, 54), (7, 8, 5, 20), (8, 8, 14, 57), (9, 8, 17, 22), (10, 9, 8, 20), (11, 8, 10, 50), (12, 8, 3, 11)], // 1905
    [(1, 6, 14, 14), (2, 5, 2, 4), (3, 6, 20, 36), (4, 6, 2, 7), (5, 6, 20, 9), (6, 7, 0, 49), (7, 8, 11, 15), (8, 8, 20, 52), (9, 8, 23, 16), (10, 9, 14, 15), (11, 8, 16, 47), (12, 8, 9, 9)], // 1906
    [(1, 6, 20, 12), (2, 5, 7, 59), (3, 7, 2, 27), (4, 6, 7, 55), (5, 7, 1, 54), (6, 7, 6, 33), (7, 8, 16, 59), (8, 9, 2, 36), (9, 9, 5, 2), (10, 9, 20, 3), (11, 8, 22, 36), (12, 8, 14, 59)], // 1907
    [(1, 7, 2, 1), (2, 5, 13, 47), (3, 6, 8, 14), (4, 5, 13, 40), (5, 6, 7, 39), (6, 6, 12, 19), (7, 7, 22, 48), (8, 8, 8, 27), (9, 8, 10, 52), (10, 9, 1, 51), (11, 8, 4, 22), (12, 7, 20, 44)], // 1908
    [(1, 6, 7, 45), (2, 4, 19, 33), (3, 6, 14, 1), (4, 5, 19, 30), (5, 6, 13, 31), (6, 6, 18, 14), (7, 8, 4, 44), (8, 8, 14, 23), (9, 8, 16, 47), (10, 9, 7, 43), (11, 8, 10, 13), (12, 8, 2, 35)], // 1909
    [(1, 6, 13, 38), (2, 5, 1, 28), (3, 6, 19, 57), (4, 6, 1, 23), (5, 6, 19, 20), (6, 6, 23, 57), (7, 8, 10, 21), (8, 8, 19, 57), (9, 8, 22, 22), (10, 9, 13, 21), (11, 8, 15, 54), (12, 8, 8, 17)], // 1910
    [(1, 6, 19, 21), (2, 5, 7, 10), (3, 7, 1, 39), (4, 6, 7, 5), (5, 7, 1, 1), (6, 7, 5, 38), (7, 8, 16, 5), (8, 9, 1, 44), (9, 9, 4, 13), (10, 9, 19, 15), (11, 8, 21, 47), (12, 8, 14, 8)], // 1911
    [(1, 7, 1, 8), (2, 5, 12, 54), (3, 6, 7, 21), (4, 5, 12, 48), (5, 6, 6, 47), (6, 6, 11, 28), (7, 7, 21, 57), (8, 8, 7, 37), (9, 8, 10, 6), (10, 9, 1, 7), (11, 8, 3, 39), (12, 7, 19, 59)], // 1912
    [(1, 6, 6, 58), (2, 4, 18, 43), (3, 6, 13, 9), (4, 5, 18, 36), (5, 6, 12, 35), (6, 6, 17, 14), (7, 8, 3, 39), (8, 8, 13, 16), (9, 8, 15, 42), (10, 9, 6, 44), (11, 8, 9, 18), (12, 8, 1, 41)], // 1913
    [(1, 6, 12, 43), (2, 5, 0, 29), (3, 6, 18, 56), (4, 6, 0, 22), (5, 6, 18, 20), (6, 6, 23, 0), (7, 8, 9, 27), (8, 8, 19, 5), (9, 8, 21, 33), (10, 9, 12, 35), (11, 8, 15, 11), (12, 8, 7, 37)], // 1914
    [(1, 6, 18, 40), (2, 5, 6, 26), (3, 7, 0, 48), (4, 6, 6, 9), (5, 7, 0, 3), (6, 7, 4, 40), (7, 8, 15, 8), (8, 9, 0, 48), (9, 9, 3, 17), (10, 9, 18, 21), (11, 8, 20, 58), (12, 8, 13, 24)], // 1915
    [(1, 7, 0, 28), (2, 5, 12, 14), (3, 6, 6, 38), (4, 5, 11, 58), (5, 6, 5, 50), (6, 6, 10, 26), (7, 7, 20, 54), (8, 8, 6, 35), (9, 8, 9, 5), (10, 9, 0, 8), (11, 8, 2, 42), (12, 7, 19, 6)], // 1916
    [(1, 6, 6, 10), (2, 4, 17, 58), (3, 6, 12, 25), (4, 5, 17, 50), (5, 6, 11, 46), (6, 6, 16, 23), (7, 8, 2, 50), (8, 8, 12, 30), (9, 8, 14, 59), (10, 9, 6, 2), (11, 8, 8, 37), (12, 8, 1, 1)], // 1917
    [(1, 6, 12, 4), (2, 4, 23, 53), (3, 6, 18, 21), (4, 5, 23, 45), (5, 6, 17, 38), (6, 6, 22, 11), (7, 8, 8, 32), (8, 8, 18, 7), (9, 8, 20, 35), (10, 9, 11, 40), (11, 8, 14, 19), (12, 8, 6, 46)], // 1918
    [(1, 6, 17, 52), (2, 5, 5, 39), (3, 7, 0, 6), (4, 6, 5, 29), (5, 6, 23, 22), (6, 7, 3, 57), (7, 8, 14, 21), (8, 8, 23, 58), (9, 9, 2, 28), (10, 9, 17, 33), (11, 8, 20, 12), (12, 8, 12, 38)], // 1919
    [(1, 6, 23, 41), (2, 5, 11, 27), (3, 6, 5, 51), (4, 5, 11, 15), (5, 6, 5, 12), (6, 6, 9, 51), (7, 7, 20, 19), (8, 8, 5, 58), (9, 8, 8, 27), (10, 8, 23, 29), (11, 8, 2, 5), (12, 7, 18, 30)], // 1920
    [(1, 6, 5, 34), (2, 4, 17, 20), (3, 6, 11, 45), (4, 5, 17, 9), (5, 6, 11, 4), (6, 6, 15, 42), (7, 8, 2, 7), (8, 8, 11, 44), (9, 8, 14, 10), (10, 9, 5, 11), (11, 8, 7, 46), (12, 8, 0, 11)], // 1921
    [(1, 6, 11, 17), (2, 4, 23, 7), (3, 6, 17, 34), (4, 5, 22, 58), (5, 6, 16, 53), (6, 6, 21, 30), (7, 8, 7, 58), (8, 8, 17, 37), (9, 8, 20, 6), (10, 9, 11, 9), (11, 8, 13, 45), (12, 8, 6, 11)], // 1922
    [(1, 6, 17, 14), (2, 5, 5, 1), (3, 6, 23, 25), (4, 6, 4, 46), (5, 6, 22, 38), (6, 7, 3, 14), (7, 8, 13, 42), (8, 8, 23, 25), (9, 9, 1, 57), (10, 9, 17, 3), (11, 8, 19, 40), (12, 8, 12, 5)], // 1923
    [(1, 6, 23, 6), (2, 5, 10, 50), (3, 6, 5, 13), (4, 5, 10, 33), (5, 6, 4, 26), (6, 6, 9, 2), (7, 7, 19, 29), (8, 8, 5, 12), (9, 8, 7, 46), (10, 8, 22, 52), (11, 8, 1, 29), (12, 7, 17, 53)], // 1924
    [(1, 6, 4, 53), (2, 4, 16, 37), (3, 6, 11, 0), (4, 5, 16, 23), (5, 6, 10, 18), (6, 6, 14, 57), (7, 8, 1, 25), (8, 8, 11, 7), (9, 8, 13, 40), (10, 9, 4, 48), (11, 8, 7, 26), (12, 7, 23, 52)], // 1925
    [(1, 6, 10, 54), (2, 4, 22, 38), (3, 6, 17, 0), (4, 5, 22, 18), (5, 6, 16, 9), (6, 6, 20, 42), (7, 8, 7, 6), (8, 8, 16, 44), (9, 8, 19, 16), (10, 9, 10, 25), (11, 8, 13, 8), (12, 8, 5, 39)], // 1926
    [(1, 6, 16, 45), (2, 5, 4, 30), (3, 6, 22, 50), (4, 6, 4, 6), (5, 6, 21, 53), (6, 7, 2, 25), (7, 8, 12, 50), (8, 8, 22, 31), (9, 9, 1, 5), (10, 9, 16, 15), (11, 8, 18, 57), (12, 8, 11, 26)], // 1927
    [(1, 6, 22, 31), (2, 5, 10, 17), (3, 6, 4, 37), (4, 5, 9, 55), (5, 6, 3, 44), (6, 6, 8, 17), (7, 7, 18, 44), (8, 8, 4, 28), (9, 8, 7, 2), (10, 8, 22, 10), (11, 8, 0, 50), (12, 7, 17, 17)], // 1928
    [(1, 6, 4, 22), (2, 4, 16, 9), (3, 6, 10, 32), (4, 5, 15, 51), (5, 6, 9, 41), (6, 6, 14, 11), (7, 8, 0, 32), (8, 8, 10, 9), (9, 8, 12, 40), (10, 9, 3, 47), (11, 8, 6, 28), (12, 7, 22, 56)], // 1929
    [(1, 6, 10, 3), (2, 4, 21, 51), (3, 6, 16, 17), (4, 5, 21, 38), (5, 6, 15, 27), (6, 6, 19, 58), (7, 8, 6, 20), (8, 8, 15, 57), (9, 8, 18, 28), (10, 9, 9, 38), (11, 8, 12, 20), (12, 8, 4, 51)], // 1930
    [(1, 6, 15, 56), (2, 5, 3, 41), (3, 6, 22, 2), (4, 6, 3, 21), (5, 6, 21, 10), (6, 7, 1, 42), (7, 8, 12, 6), (8, 8, 21, 45), (9, 9, 0, 17), (10, 9, 15, 27), (11, 8, 18, 10), (12, 8, 10, 40)], // 1931
    [(1, 6, 21, 45), (2, 5, 9, 30), (3, 6, 3, 50), (4, 5, 9, 6), (5, 6, 2, 55), (6, 6, 7, 28), (7, 7, 17, 52), (8, 8, 3, 32), (9, 8, 6, 3), (10, 8, 21, 10), (11, 7, 23, 50), (12, 7, 16, 18)], // 1932
    [(1, 6, 3, 23), (2, 4, 15, 9), (3, 6, 9, 32), (4, 5, 14, 51), (5, 6, 8, 42), (6, 6, 13, 18), (7, 7, 23, 45), (8, 8, 9, 26), (9, 8, 11, 58), (10, 9, 3, 4), (11, 8, 5, 43), (12, 7, 22, 11)], // 1933
    [(1, 6, 9, 17), (2, 4, 21, 4), (3, 6, 15, 26), (4, 5, 20, 44), (5, 6, 14, 31), (6, 6, 19, 2), (7, 8, 5, 25), (8, 8, 15, 4), (9, 8, 17, 36), (10, 9, 8, 45), (11, 8, 11, 27), (12, 8, 3, 57)], // 1934
    [(1, 6, 15, 2), (2, 5, 2, 49), (3, 6, 21, 10), (4, 6, 2, 26), (5, 6, 20, 12), (6, 7, 0, 42), (7, 8, 11, 6), (8, 8, 20, 48), (9, 8, 23, 24), (10, 9, 14, 36), (11, 8, 17, 18), (12, 8, 9, 45)], // 1935
    [(1, 6, 20, 47), (2, 5, 8, 29), (3, 6, 2, 49), (4, 5, 8, 7), (5, 6, 1, 57), (6, 6, 6, 31), (7, 7, 16, 58), (8, 8, 2, 43), (9, 8, 5, 21), (10, 8, 20, 33), (11, 7, 23, 15), (12, 7, 15, 42)], // 1936
    [(1, 6, 2, 44), (2, 4, 14, 26), (3, 6, 8, 45), (4, 5, 14, 2), (5, 6, 7, 51), (6, 6, 12, 23), (7, 7, 22, 46), (8, 8, 8, 25), (9, 8, 10, 59), (10, 9, 2, 11), (11, 8, 4, 55), (12, 7, 21, 26)], // 1937
    [(1, 6, 8, 31), (2, 4, 20, 15), (3, 6, 14, 34), (4, 5, 19, 49), (5, 6, 13, 35), (6, 6, 18, 7), (7, 8, 4, 31), (8, 8, 14, 13), (9, 8, 16, 48), (10, 9, 8, 1), (11, 8, 10, 48), (12, 8, 3, 22)], // 1938
    [(1, 6, 14, 28), (2, 5, 2, 11), (3, 6, 20, 26), (4, 6, 1, 38), (5, 6, 19, 21), (6, 6, 23, 52), (7, 8, 10, 18), (8, 8, 20, 3), (9, 8, 22, 42), (10, 9, 13, 57), (11, 8, 16, 44), (12, 8, 9, 17)], // 1939
    [(1, 6, 20, 24), (2, 5, 8, 8), (3, 6, 2, 24), (4, 5, 7, 35), (5, 6, 1, 16), (6, 6, 5, 44), (7, 7, 16, 8), (8, 8, 1, 52), (9, 8, 4, 29), (10, 8, 19, 42), (11, 7, 22, 27), (12, 7, 14, 58)], // 1940
    [(1, 6, 2, 4), (2, 4, 13, 50), (3, 6, 8, 10), (4, 5, 13, 25), (5, 6, 7, 10), (6, 6, 11, 39), (7, 7, 22, 3), (8, 8, 7, 46), (9, 8, 10, 24), (10, 9, 1, 38), (11, 8, 4, 24), (12, 7, 20, 56)], // 1941
    [(1, 6, 8, 2), (2, 4, 19, 49), (3, 6, 14, 9), (4, 5, 19, 24), (5, 6, 13, 7), (6, 6, 17, 33), (7, 8, 3, 52), (8, 8, 13, 30), (9, 8, 16, 6), (10, 9, 7, 22), (11, 8, 10, 11), (12, 8, 2, 47)], // 1942
    [(1, 6, 13, 55), (2, 5, 1, 40), (3, 6, 19, 59), (4, 6, 1, 11), (5, 6, 18, 54), (6, 6, 23, 19), (7, 8, 9, 39), (8, 8, 19, 18), (9, 8, 21, 55), (10, 9, 13, 10), (11, 8, 15, 59), (12, 8, 8, 33)], // 1943
    [(1, 6, 19, 39), (2, 5, 7, 23), (3, 6, 1, 41), (4, 5, 6, 54), (5, 6, 0, 40), (6, 6, 5, 11), (7, 7, 15, 36), (8, 8, 1, 19), (9, 8, 3, 56), (10, 8, 19, 9), (11, 7, 21, 55), (12, 7, 14, 28)], // 1944
    [(1, 6, 1, 35), (2, 4, 13, 20), (3, 6, 7, 38), (4, 5, 12, 52), (5, 6, 6, 37), (6, 6, 11, 6), (7, 7, 21, 27), (8, 8, 7, 5), (9, 8, 9, 38), (10, 9, 0, 49), (11, 8, 3, 34), (12, 7, 20, 8)], // 1945
    [(1, 6, 7, 16), (2, 4, 19, 4), (3, 6, 13, 25), (4, 5, 18, 39), (5, 6, 12, 22), (6, 6, 16, 49), (7, 8, 3, 11), (8, 8, 12, 52), (9, 8, 15, 27), (10, 9, 6, 41), (11, 8, 9, 27), (12, 8, 2, 0)], // 1946
    [(1, 6, 13, 6), (2, 5, 0, 50), (3, 6, 19, 8), (4, 6, 0, 20), (5, 6, 18, 3), (6, 6, 22, 31), (7, 8, 8, 56), (8, 8, 18, 41), (9, 8, 21, 21), (10, 9, 12, 37), (11, 8, 15, 24), (12, 8, 7, 56)], // 1947
    [(1, 6, 19, 0), (2, 5, 6, 42), (3, 6, 0, 58), (4, 5, 6, 10), (5, 5, 23, 52), (6, 6, 4, 20), (7, 7, 14, 44), (8, 8, 0, 26), (9, 8, 3, 5), (10, 8, 18, 20), (11, 7, 21, 7), (12, 7, 13, 38)], // 1948
    [(1, 6, 0, 41), (2, 4, 12, 23), (3, 6, 6, 39), (4, 5, 11, 52), (5, 6, 5, 37), (6, 6, 10, 7), (7, 7, 20, 32), (8, 8, 6, 15), (9, 8, 8, 54), (10, 9, 0, 11), (11, 8, 3, 0), (12, 7, 19, 33)], // 1949
    [(1, 6, 6, 39), (2, 4, 18, 21), (3, 6, 12, 35), (4, 5, 17, 45), (5, 6, 11, 25), (6, 6, 15, 51), (7, 8, 2, 13), (8, 8, 11, 55), (9, 8, 14, 34), (10, 9, 5, 52), (11, 8, 8, 44), (12, 8, 1, 22)], // 1950
    [(1, 6, 12, 30), (2, 5, 0, 14), (3, 6, 18, 27), (4, 5, 23, 33), (5, 6, 17, 9), (6, 6, 21, 33), (7, 8, 7, 54), (8, 8, 17, 37), (9, 8, 20, 18), (10, 9, 11, 36), (11, 8, 14, 27), (12, 8, 7, 2)], // 1951
    [(1, 6, 18, 10), (2, 5, 5, 53), (3, 6, 0, 7), (4, 5, 5, 15), (5, 5, 22, 54), (6, 6, 3, 20), (7, 7, 13, 45), (8, 7, 23, 31), (9, 8, 2, 14), (10, 8, 17, 32), (11, 7, 20, 22), (12, 7, 12, 56)], // 1952
    [(1, 6, 0, 2), (2, 4, 11, 46), (3, 6, 6, 3), (4, 5, 11, 13), (5, 6, 4, 52), (6, 6, 9, 16), (7, 7, 19, 35), (8, 8, 5, 15), (9, 8, 7, 53), (10, 8, 23, 10), (11, 8, 2, 1), (12, 7, 18, 37)], // 1953
    [(1, 6, 5, 45), (2, 4, 17, 31), (3, 6, 11, 49), (4, 5, 16, 59), (5, 6, 10, 38), (6, 6, 15, 1), (7, 8, 1, 19), (8, 8, 10, 59), (9, 8, 13, 38), (10, 9, 4, 57), (11, 8, 7, 51), (12, 8, 0, 28)], // 1954
    [(1, 6, 11, 36), (2, 4, 23, 18), (3, 6, 17, 31), (4, 5, 22, 39), (5, 6, 16, 18), (6, 6, 20, 43), (7, 8, 7, 6), (8, 8, 16, 50), (9, 8, 19, 32), (10, 9, 10, 52), (11, 8, 13, 45), (12, 8, 6, 23)], // 1955
    [(1, 6, 17, 30), (2, 5, 5, 12), (3, 5, 23, 25), (4, 5, 4, 31), (5, 5, 22, 10), (6, 6, 2, 36), (7, 7, 12, 58), (8, 7, 22, 40), (9, 8, 1, 19), (10, 8, 16, 36), (11, 7, 19, 26), (12, 7, 12, 2)], // 1956
    [(1, 5, 23, 11), (2, 4, 10, 55), (3, 6, 5, 10), (4, 5, 10, 19), (5, 6, 3, 58), (6, 6, 8, 25), (7, 7, 18, 48), (8, 8, 4, 32), (9, 8, 7, 12), (10, 8, 22, 30), (11, 8, 1, 20), (12, 7, 17, 56)], // 1957
    [(1, 6, 5, 4), (2, 4, 16, 49), (3, 6, 11, 5), (4, 5, 16, 12), (5, 6, 9, 49), (6, 6, 14, 12), (7, 8, 0, 33), (8, 8, 10, 17), (9, 8, 12, 59), (10, 9, 4, 19), (11, 8, 7, 12), (12, 7, 23, 50)], // 1958
    [(1, 6, 10, 58), (2, 4, 22, 42), (3, 6, 16, 57), (4, 5, 22, 3), (5, 6, 15, 39), (6, 6, 20, 0), (7, 8, 6, 20), (8, 8, 16, 4), (9, 8, 18, 48), (10, 9, 10, 10), (11, 8, 13, 2), (12, 8, 5, 37)], // 1959
    [(1, 6, 16, 43), (2, 5, 4, 23), (3, 5, 22, 36), (4, 5, 3, 44), (5, 5, 21, 23), (6, 6, 1, 49), (7, 7, 12, 13), (8, 7, 22, 0), (9, 8, 0, 45), (10, 8, 16, 9), (11, 7, 19, 2), (12, 7, 11, 38)], // 1960
    [(1, 5, 22, 43), (2, 4, 10, 22), (3, 6, 4, 35), (4, 5, 9, 42), (5, 6, 3, 21), (6, 6, 7, 46), (7, 7, 18, 7), (8, 8, 3, 48), (9, 8, 6, 29), (10, 8, 21, 51), (11, 8, 0, 46), (12, 7, 17, 26)], // 1961
    [(1, 6, 4, 35), (2, 4, 16, 17), (3, 6, 10, 30), (4, 5, 15, 34), (5, 6, 9, 10), (6, 6, 13, 31), (7, 7, 23, 51), (8, 8, 9, 34), (9, 8, 12, 15), (10, 9, 3, 38), (11, 8, 6, 35), (12, 7, 23, 17)], // 1962
    [(1, 6, 10, 27), (2, 4, 22, 8), (3, 6, 16, 17), (4, 5, 21, 19), (5, 6, 14, 52), (6, 6, 19, 14), (7, 8, 5, 38), (8, 8, 15, 25), (9, 8, 18, 12), (10, 9, 9, 36), (11, 8, 12, 32), (12, 8, 5, 13)], // 1963
    [(1, 6, 16, 22), (2, 5, 4, 5), (3, 5, 22, 16), (4, 5, 3, 18), (5, 5, 20, 51), (6, 6, 1, 12), (7, 7, 11, 32), (8, 7, 21, 16), (9, 7, 23, 59), (10, 8, 15, 21), (11, 7, 18, 15), (12, 7, 10, 53)], // 1964
    [(1, 5, 22, 2), (2, 4, 9, 46), (3, 6, 4, 1), (4, 5, 9, 7), (5, 6, 2, 42), (6, 6, 7, 2), (7, 7, 17, 21), (8, 8, 3, 5), (9, 8, 5, 48), (10, 8, 21, 11), (11, 8, 0, 6), (12, 7, 16, 45)], // 1965
    [(1, 6, 3, 54), (2, 4, 15, 38), (3, 6, 9, 51), (4, 5, 14, 57), (5, 6, 8, 31), (6, 6, 12, 50), (7, 7, 23, 7), (8, 8, 8, 49), (9, 8, 11, 32), (10, 9, 2, 57), (11, 8, 5, 55), (12, 7, 22, 38)], // 1966
    [(1, 6, 9, 48), (2, 4, 21, 31), (3, 6, 15, 42), (4, 5, 20, 45), (5, 6, 14, 18), (6, 6, 18, 36), (7, 8, 4, 53), (8, 8, 14, 35), (9, 8, 17, 18), (10, 9, 8, 41), (11, 8, 11, 37), (12, 8, 4, 18)], // 1967
    [(1, 6, 15, 26), (2, 5, 3, 8), (3, 5, 21, 18), (4, 5, 2, 21), (5, 5, 19, 56), (6, 6, 0, 19), (7, 7, 10, 42), (8, 7, 20, 27), (9, 7, 23, 11), (10, 8, 14, 34), (11, 7, 17, 29), (12, 7, 10, 8)], // 1968
    [(1, 5, 21, 17), (2, 4, 8, 59), (3, 6, 3, 11), (4, 5, 8, 15), (5, 6, 1, 50), (6, 6, 6, 12), (7, 7, 16, 32), (8, 8, 2, 14), (9, 8, 4, 55), (10, 8, 20, 17), (11, 7, 23, 11), (12, 7, 15, 51)], // 1969
    [(1, 6, 3, 2), (2, 4, 14, 46), (3, 6, 8, 59), (4, 5, 14, 2), (5, 6, 7, 34), (6, 6, 11, 52), (7, 7, 22, 10), (8, 8, 7, 54), (9, 8, 10, 38), (10, 9, 2, 2), (11, 8, 4, 58), (12, 7, 21, 37)], // 1970
    [(1, 6, 8, 45), (2, 4, 20, 26), (3, 6, 14, 35), (4, 5, 19, 36), (5, 6, 13, 8), (6, 6, 17, 29), (7, 8, 3, 51), (8, 8, 13, 40), (9, 8, 16, 30), (10, 9, 7, 59), (11, 8, 10, 57), (12, 8, 3, 36)], // 1971
    [(1, 6, 14, 42), (2, 5, 2, 20), (3, 5, 20, 28), (4, 5, 1, 29), (5, 5, 19, 1), (6, 5, 23, 22), (7, 7, 9, 43), (8, 7, 19, 29), (9, 7, 22, 15), (10, 8, 13, 42), (11, 7, 16, 39), (12, 7, 9, 19)], // 1972
    [(1, 5, 20, 25), (2, 4, 8, 4), (3, 6, 2, 13), (4, 5, 7, 14), (5, 6, 0, 47), (6, 6, 5, 7), (7, 7, 15, 27), (8, 8, 1, 13), (9, 8, 3, 59), (10, 8, 19, 27), (11, 7, 22, 27), (12, 7, 15, 10)], // 1973
    [(1, 6, 2, 20), (2, 4, 14, 0), (3, 6, 8, 7), (4, 5, 13, 5), (5, 6, 6, 34), (6, 6, 10, 52), (7, 7, 21, 11), (8, 8, 6, 57), (9, 8, 9, 45), (10, 9, 1, 15), (11, 8, 4, 18), (12, 7, 21, 5)], // 1974
    [(1, 6, 8, 18), (2, 4, 19, 59), (3, 6, 14, 6), (4, 5, 19, 2), (5, 6, 12, 27), (6, 6, 16, 42), (7, 8, 2, 59), (8, 8, 12, 45), (9, 8, 15, 33), (10, 9, 7, 2), (11, 8, 10, 3), (12, 8, 2, 46)], // 1975
    [(1, 6, 13, 57), (2, 5, 1, 40), (3, 5, 19, 48), (4, 5, 0, 47), (5, 5, 18, 15), (6, 5, 22, 31), (7, 7, 8, 51), (8, 7, 18, 38), (9, 7, 21, 28), (10, 8, 12, 58), (11, 7, 15, 59), (12, 7, 8, 41)], // 1976
    [(1, 5, 19, 51), (2, 4, 7, 33), (3, 6, 1, 44), (4, 5, 6, 46), (5, 6, 0, 16), (6, 6, 4, 32), (7, 7, 14, 48), (8, 8, 0, 30), (9, 8, 3, 16), (10, 8, 18, 44), (11, 7, 21, 46), (12, 7, 14, 31)], // 1977
    [(1, 6, 1, 43), (2, 4, 13, 27), (3, 6, 7, 38), (4, 5, 12, 39), (5, 6, 6, 9), (6, 6, 10, 23), (7, 7, 20, 37), (8, 8, 6, 18), (9, 8, 9, 2), (10, 9, 0, 31), (11, 8, 3, 34), (12, 7, 20, 20)], // 1978
    [(1, 6, 7, 32), (2, 4, 19, 12), (3, 6, 13, 20), (4, 5, 18, 18), (5, 6, 11, 47), (6, 6, 16, 5), (7, 8, 2, 25), (8, 8, 12, 11), (9, 8, 15, 0), (10, 9, 6, 30), (11, 8, 9, 33), (12, 8, 2, 18)], // 1979
    [(1, 6, 13, 29), (2, 5, 1, 10), (3, 5, 19, 17), (4, 5, 0, 15), (5, 5, 17, 45), (6, 5, 22, 4), (7, 7, 8, 24), (8, 7, 18, 9), (9, 7, 20, 53), (10, 8, 12, 19), (11, 7, 15, 18), (12, 7, 8, 1)], // 1980
    [(1, 5, 19, 13), (2, 4, 6, 55), (3, 6, 1, 5), (4, 5, 6, 5), (5, 5, 23, 35), (6, 6, 3, 53), (7, 7, 14, 12), (8, 7, 23, 57), (9, 8, 2, 43), (10, 8, 18, 9), (11, 7, 21, 8), (12, 7, 13, 51)], // 1981
    [(1, 6, 1, 3), (2, 4, 12, 45), (3, 6, 6, 55), (4, 5, 11, 53), (5, 6, 5, 20), (6, 6, 9, 36), (7, 7, 19, 55), (8, 8, 5, 42), (9, 8, 8, 32), (10, 9, 0, 2), (11, 8, 3, 4), (12, 7, 19, 48)], // 1982
    [(1, 6, 6, 59), (2, 4, 18, 40), (3, 6, 12, 47), (4, 5, 17, 44), (5, 6, 11, 11), (6, 6, 15, 26), (7, 8, 1, 43), (8, 8, 11, 30), (9, 8, 14, 20), (10, 9, 5, 51), (11, 8, 8, 52), (12, 8, 1, 34)], // 1983
    [(1, 6, 12, 41), (2, 5, 0, 19), (3, 5, 18, 25), (4, 4, 23, 22), (5, 5, 16, 51), (6, 5, 21, 9), (7, 7, 7, 29), (8, 7, 17, 18), (9, 7, 20, 10), (10, 8, 11, 42), (11, 7, 14, 45), (12, 7, 7, 28)], // 1984
    [(1, 5, 18, 35), (2, 4, 6, 12), (3, 6, 0, 16), (4, 5, 5, 14), (5, 5, 22, 43), (6, 6, 3, 0), (7, 7, 13, 19), (8, 7, 23, 4), (9, 8, 1, 53), (10, 8, 17, 24), (11, 7, 20, 29), (12, 7, 13, 16)], // 1985
    [(1, 6, 0, 28), (2, 4, 12, 8), (3, 6, 6, 12), (4, 5, 11, 6), (5, 6, 4, 31), (6, 6, 8, 44), (7, 7, 19, 1), (8, 8, 4, 46), (9, 8, 7, 35), (10, 8, 23, 7), (11, 8, 2, 13), (12, 7, 19, 1)], // 1986
    [(1, 6, 6, 13), (2, 4, 17, 52), (3, 6, 11, 54), (4, 5, 16, 44), (5, 6, 10, 6), (6, 6, 14, 19), (7, 8, 0, 39), (8, 8, 10, 29), (9, 8, 13, 24), (10, 9, 5, 0), (11, 8, 8, 6), (12, 8, 0, 52)], // 1987
    [(1, 6, 12, 4), (2, 4, 23, 43), (3, 5, 17, 47), (4, 4, 22, 39), (5, 5, 16, 2), (6, 5, 20, 15), (7, 7, 6, 33), (8, 7, 16, 20), (9, 7, 19, 11), (10, 8, 10, 44), (11, 7, 13, 49), (12, 7, 6, 34)], // 1988
    [(1, 5, 17, 46), (2, 4, 5, 27), (3, 5, 23, 34), (4, 5, 4, 30), (5, 5, 21, 54), (6, 6, 2, 5), (7, 7, 12, 19), (8, 7, 22, 4), (9, 8, 0, 54), (10, 8, 16, 27), (11, 7, 19, 34), (12, 7, 12, 21)], // 1989
    [(1, 5, 23, 33), (2, 4, 11, 14), (3, 6, 5, 19), (4, 5, 10, 13), (5, 6, 3, 36), (6, 6, 7, 46), (7, 7, 18, 0), (8, 8, 3, 45), (9, 8, 6, 37), (10, 8, 22, 14), (11, 8, 1, 24), (12, 7, 18, 14)], // 1990
    [(1, 6, 5, 28), (2, 4, 17, 8), (3, 6, 11, 12), (4, 5, 16, 5), (5, 6, 9, 27), (6, 6, 13, 38), (7, 7, 23, 53), (8, 8, 9, 37), (9, 8, 12, 27), (10, 9, 4, 1), (11, 8, 7, 8), (12, 7, 23, 56)], // 1991
    [(1, 6, 11, 9), (2, 4, 22, 48), (3, 5, 16, 52), (4, 4, 21, 45), (5, 5, 15, 9), (6, 5, 19, 22), (7, 7, 5, 40), (8, 7, 15, 27), (9, 7, 18, 18), (10, 8, 9, 51), (11, 7, 12, 57), (12, 7, 5, 44)], // 1992
    [(1, 5, 16, 56), (2, 4, 4, 37), (3, 5, 22, 43), (4, 5, 3, 37), (5, 5, 21, 2), (6, 6, 1, 15), (7, 7, 11, 32), (8, 7, 21, 18), (9, 8, 0, 8), (10, 8, 15, 40), (11, 7, 18, 45), (12, 7, 11, 34)], // 1993
    [(1, 5, 22, 48), (2, 4, 10, 31), (3, 6, 4, 38), (4, 5, 9, 32), (5, 6, 2, 54), (6, 6, 7, 5), (7, 7, 17, 19), (8, 8, 3, 4), (9, 8, 5, 55), (10, 8, 21, 29), (11, 8, 0, 35), (12, 7, 17, 23)], // 1994
    [(1, 6, 4, 34), (2, 4, 16, 13), (3, 6, 10, 16), (4, 5, 15, 8), (5, 6, 8, 30), (6, 6, 12, 42), (7, 7, 23, 1), (8, 8, 8, 52), (9, 8, 11, 49), (10, 9, 3, 27), (11, 8, 6, 36), (12, 7, 23, 22)], // 1995
    [(1, 6, 10, 31), (2, 4, 22, 8), (3, 5, 16, 10), (4, 4, 21, 2), (5, 5, 14, 26), (6, 5, 18, 41), (7, 7, 5, 0), (8, 7, 14, 49), (9, 7, 17, 42), (10, 8, 9, 19), (11, 7, 12, 27), (12, 7, 5, 14)], // 1996
    [(1, 5, 16, 24), (2, 4, 4, 2), (3, 5, 22, 4), (4, 5, 2, 56), (5, 5, 20, 20), (6, 6, 0, 33), (7, 7, 10, 49), (8, 7, 20, 36), (9, 7, 23, 29), (10, 8, 15, 5), (11, 7, 18, 14), (12, 7, 11, 5)], // 1997
    [(1, 5, 22, 18), (2, 4, 9, 57), (3, 6, 3, 57), (4, 5, 8, 45), (5, 6, 2, 3), (6, 6, 6, 14), (7, 7, 16, 30), (8, 8, 2, 20), (9, 8, 5, 16), (10, 8, 20, 56), (11, 8, 0, 8), (12, 7, 17, 2)], // 1998
    [(1, 6, 4, 17), (2, 4, 15, 57), (3, 6, 9, 58), (4, 5, 14, 45), (5, 6, 8, 1), (6, 6, 12, 9), (7, 7, 22, 25), (8, 8, 8, 14), (9, 8, 11, 10), (10, 9, 2, 48), (11, 8, 5, 58), (12, 7, 22, 48)], // 1999
    [(1, 6, 10, 1), (2, 4, 21, 40), (3, 5, 15, 43), (4, 4, 20, 32), (5, 5, 13, 50), (6, 5, 17, 59), (7, 7, 4, 14), (8, 7, 14, 3), (9, 7, 16, 59), (10, 8, 8, 38), (11, 7, 11, 48), (12, 7, 4, 37)], // 2000
    [(1, 5, 15, 49), (2, 4, 3, 29), (3, 5, 21, 33), (4, 5, 2, 25), (5, 5, 19, 45), (6, 5, 23, 54), (7, 7, 10, 7), (8, 7, 19, 52), (9, 7, 22, 46), (10, 8, 14, 25), (11, 7, 17, 37), (12, 7, 10, 29)], // 2001
    [(1, 5, 21, 44), (2, 4, 9, 24), (3, 6, 3, 28), (4, 5, 8, 18), (5, 6, 1, 37), (6, 6, 5, 45), (7, 7, 15, 56), (8, 8, 1, 39), (9, 8, 4, 31), (10, 8, 20, 9), (11, 7, 23, 22), (12, 7, 16, 14)], // 2002
    [(1, 6, 3, 28), (2, 4, 15, 6), (3, 6, 9, 5), (4, 5, 13, 53), (5, 6, 7, 11), (6, 6, 11, 20), (7, 7, 21, 36), (8, 8, 7, 24), (9, 8, 10, 20), (10, 9, 2, 1), (11, 8, 5, 13), (12, 7, 22, 5)], // 2003
    [(1, 6, 9, 19), (2, 4, 20, 56), (3, 5, 14, 56), (4, 4, 19, 43), (5, 5, 13, 3), (6, 5, 17, 14), (7, 7, 3, 31), (8, 7, 13, 20), (9, 7, 16, 13), (10, 8, 7, 49), (11, 7, 10, 59), (12, 7, 3, 49)], // 2004
    [(1, 5, 15, 3), (2, 4, 2, 43), (3, 5, 20, 45), (4, 5, 1, 34), (5, 5, 18, 53), (6, 5, 23, 2), (7, 7, 9, 17), (8, 7, 19, 3), (9, 7, 21, 57), (10, 8, 13, 33), (11, 7, 16, 42), (12, 7, 9, 33)], // 2005
    [(1, 5, 20, 47), (2, 4, 8, 27), (3, 6, 2, 29), (4, 5, 7, 16), (5, 6, 0, 31), (6, 6, 4, 37), (7, 7, 14, 51), (8, 8, 0, 41), (9, 8, 3, 39), (10, 8, 19, 21), (11, 7, 22, 35), (12, 7, 15, 27)], // 2006
    [(1, 6, 2, 40), (2, 4, 14, 18), (3, 6, 8, 18), (4, 5, 13, 5), (5, 6, 6, 20), (6, 6, 10, 27), (7, 7, 20, 42), (8, 8, 6, 31), (9, 8, 9, 29), (10, 9, 1, 12), (11, 8, 4, 24), (12, 7, 21, 14)], // 2007
    [(1, 6, 8, 25), (2, 4, 20, 0), (3, 5, 13, 59), (4, 4, 18, 46), (5, 5, 12, 4), (6, 5, 16, 12), (7, 7, 2, 27), (8, 7, 12, 16), (9, 7, 15, 14), (10, 8, 6, 57), (11, 7, 10, 11), (12, 7, 3, 2)], // 2008
    [(1, 5, 14, 14), (2, 4, 1, 50), (3, 5, 19, 48), (4, 5, 0, 34), (5, 5, 17, 51), (6, 5, 21, 59), (7, 7, 8, 14), (8, 7, 18, 1), (9, 7, 20, 58), (10, 8, 12, 40), (11, 7, 15, 56), (12, 7, 8, 52)], // 2009
    [(1, 5, 20, 9), (2, 4, 7, 48), (3, 6, 1, 46), (4, 5, 6, 31), (5, 5, 23, 44), (6, 6, 3, 49), (7, 7, 14, 2), (8, 7, 23, 49), (9, 8, 2, 45), (10, 8, 18, 27), (11, 7, 21, 43), (12, 7, 14, 38)], // 2010
    [(1, 6, 1, 55), (2, 4, 13, 33), (3, 6, 7, 30), (4, 5, 12, 12), (5, 6, 5, 23), (6, 6, 9, 27), (7, 7, 19, 42), (8, 8, 5, 33), (9, 8, 8, 34), (10, 9, 0, 19), (11, 8, 3, 35), (12, 7, 20, 29)], // 2011
    [(1, 6, 7, 44), (2, 4, 19, 22), (3, 5, 13, 21), (4, 4, 18, 6), (5, 5, 11, 20), (6, 5, 15, 26), (7, 7, 1, 41), (8, 7, 11, 31), (9, 7, 14, 29), (10, 8, 6, 12), (11, 7, 9, 26), (12, 7, 2, 19)], // 2012
    [(1, 5, 13, 34), (2, 4, 1, 13), (3, 5, 19, 15), (4, 5, 0, 3), (5, 5, 17, 18), (6, 5, 21, 23), (7, 7, 7, 35), (8, 7, 17, 20), (9, 7, 20, 16), (10, 8, 11, 58), (11, 7, 15, 14), (12, 7, 8, 9)], // 2013
    [(1, 5, 19, 24), (2, 4, 7, 3), (3, 6, 1, 2), (4, 5, 5, 47), (5, 5, 22, 59), (6, 6, 3, 3), (7, 7, 13, 15), (8, 7, 23, 3), (9, 8, 2, 1), (10, 8, 17, 48), (11, 7, 21, 7), (12, 7, 14, 4)], // 2014
    [(1, 6, 1, 21), (2, 4, 12, 59), (3, 6, 6, 56), (4, 5, 11, 39), (5, 6, 4, 53), (6, 6, 8, 58), (7, 7, 19, 12), (8, 8, 5, 1), (9, 8, 8, 0), (10, 8, 23, 43), (11, 8, 2, 59), (12, 7, 19, 53)], // 2015
    [(1, 6, 7, 8), (2, 4, 18, 46), (3, 5, 12, 44), (4, 4, 17, 28), (5, 5, 10, 42), (6, 5, 14, 49), (7, 7, 1, 3), (8, 7, 10, 53), (9, 7, 13, 51), (10, 8, 5, 33), (11, 7, 8, 48), (12, 7, 1, 41)], // 2016
    [(1, 5, 12, 56), (2, 4, 0, 34), (3, 5, 18, 33), (4, 4, 23, 17), (5, 5, 16, 31), (6, 5, 20, 37), (7, 7, 6, 51), (8, 7, 16, 40), (9, 7, 19, 39), (10, 8, 11, 22), (11, 7, 14, 38), (12, 7, 7, 33)], // 2017
    [(1, 5, 18, 49), (2, 4, 6, 29), (3, 6, 0, 28), (4, 5, 5, 13), (5, 5, 22, 25), (6, 6, 2, 29), (7, 7, 12, 42), (8, 7, 22, 31), (9, 8, 1, 30), (10, 8, 17, 15), (11, 7, 20, 32), (12, 7, 13, 26)], // 2018
    [(1, 6, 0, 39), (2, 4, 12, 14), (3, 6, 6, 10), (4, 5, 10, 51), (5, 6, 4, 3), (6, 6, 8, 6), (7, 7, 18, 21), (8, 8, 4, 13), (9, 8, 7, 17), (10, 8, 23, 6), (11, 8, 2, 24), (12, 7, 19, 18)], // 2019
    [(1, 6, 6, 30), (2, 4, 18, 3), (3, 5, 11, 57), (4, 4, 16, 38), (5, 5, 9, 52), (6, 5, 13, 58), (7, 7, 0, 14), (8, 7, 10, 6), (9, 7, 13, 8), (10, 8, 4, 55), (11, 7, 8, 14), (12, 7, 1, 9)], // 2020
    [(1, 5, 12, 23), (2, 3, 23, 59), (3, 5, 17, 54), (4, 4, 22, 35), (5, 5, 15, 47), (6, 5, 19, 52), (7, 7, 6, 5), (8, 7, 15, 54), (9, 7, 18, 53), (10, 8, 10, 39), (11, 7, 13, 59), (12, 7, 6, 57)], // 2021
    [(1, 5, 18, 14), (2, 4, 5, 51), (3, 5, 23, 44), (4, 5, 4, 20), (5, 5, 21, 26), (6, 6, 1, 26), (7, 7, 11, 38), (8, 7, 21, 29), (9, 8, 0, 32), (10, 8, 16, 22), (11, 7, 19, 45), (12, 7, 12, 46)], // 2022
    [(1, 6, 0, 5), (2, 4, 11, 43), (3, 6, 5, 36), (4, 5, 10, 13), (5, 6, 3, 19), (6, 6, 7, 18), (7, 7, 17, 31), (8, 8, 3, 23), (9, 8, 6, 27), (10, 8, 22, 16), (11, 8, 1, 36), (12, 7, 18, 33)], // 2023
    [(1, 6, 5, 49), (2, 4, 17, 27), (3, 5, 11, 23), (4, 4, 16, 2), (5, 5, 9, 10), (6, 5, 13, 10), (7, 6, 23, 20), (8, 7, 9, 9), (9, 7, 12, 11), (10, 8, 4, 0), (11, 7, 7, 20), (12, 7, 0, 17)], // 2024
    [(1, 5, 11, 33), (2, 3, 23, 10), (3, 5, 17, 7), (4, 4, 21, 49), (5, 5, 14, 57), (6, 5, 18, 57), (7, 7, 5, 5), (8, 7, 14, 51), (9, 7, 17, 52), (10, 8, 9, 41), (11, 7, 13, 4), (12, 7, 6, 4)], // 2025
    [(1, 5, 17, 23), (2, 4, 5, 2), (3, 5, 22, 59), (4, 5, 3, 40), (5, 5, 20, 49), (6, 6, 0, 48), (7, 7, 10, 57), (8, 7, 20, 43), (9, 7, 23, 41), (10, 8, 15, 29), (11, 7, 18, 52), (12, 7, 11, 52)], // 2026
    [(1, 5, 23, 10), (2, 4, 10, 46), (3, 6, 4, 39), (4, 5, 9, 17), (5, 6, 2, 25), (6, 6, 6, 26), (7, 7, 16, 37), (8, 8, 2, 27), (9, 8, 5, 28), (10, 8, 21, 17), (11, 8, 0, 38), (12, 7, 17, 37)], // 2027
    [(1, 6, 4, 55), (2, 4, 16, 31), (3, 5, 10, 25), (4, 4, 15, 3), (5, 5, 8, 12), (6, 5, 12, 16), (7, 6, 22, 30), (8, 7, 8, 21), (9, 7, 11, 22), (10, 8, 3, 8), (11, 7, 6, 27), (12, 6, 23, 25)], // 2028
    [(1, 5, 10, 42), (2, 3, 22, 21), (3, 5, 16, 17), (4, 4, 20, 58), (5, 5, 14, 8), (6, 5, 18, 10), (7, 7, 4, 22), (8, 7, 14, 12), (9, 7, 17, 12), (10, 8, 8, 58), (11, 7, 12, 17), (12, 7, 5, 14)], // 2029
    [(1, 5, 16, 30), (2, 4, 4, 8), (3, 5, 22, 3), (4, 5, 2, 41), (5, 5, 19, 46), (6, 5, 23, 44), (7, 7, 9, 55), (8, 7, 19, 47), (9, 7, 22, 53), (10, 8, 14, 45), (11, 7, 18, 8), (12, 7, 11, 7)], // 2030
    [(1, 5, 22, 23), (2, 4, 9, 58), (3, 6, 3, 51), (4, 5, 8, 28), (5, 6, 1, 35), (6, 6, 5, 36), (7, 7, 15, 49), (8, 8, 1, 43), (9, 8, 4, 50), (10, 8, 20, 43), (11, 8, 0, 5), (12, 7, 17, 3)], // 2031
    [(1, 6, 4, 16), (2, 4, 15, 49), (3, 5, 9, 40), (4, 4, 14, 17), (5, 5, 7, 26), (6, 5, 11, 28), (7, 6, 21, 41), (8, 7, 7, 33), (9, 7, 10, 38), (10, 8, 2, 30), (11, 7, 5, 54), (12, 6, 22, 53)], // 2032
    [(1, 5, 10, 8), (2, 3, 21, 41), (3, 5, 15, 32), (4, 4, 20, 8), (5, 5, 13, 14), (6, 5, 17, 13), (7, 7, 3, 25), (8, 7, 13, 16), (9, 7, 16, 20), (10, 8, 8, 14), (11, 7, 11, 41), (12, 7, 4, 45)], // 2033
    [(1, 5, 16, 4), (2, 4, 3, 41), (3, 5, 21, 32), (4, 5, 2, 6), (5, 5, 19, 9), (6, 5, 23, 6), (7, 7, 9, 17), (8, 7, 19, 9), (9, 7, 22, 14), (10, 8, 14, 7), (11, 7, 17, 33), (12, 7, 10, 37)], // 2034
    [(1, 5, 21, 56), (2, 4, 9, 32), (3, 6, 3, 22), (4, 5, 7, 54), (5, 6, 0, 55), (6, 6, 4, 51), (7, 7, 15, 1), (8, 8, 0, 54), (9, 8, 4, 2), (10, 8, 19, 57), (11, 7, 23, 24), (12, 7, 16, 25)], // 2035
    [(1, 6, 3, 43), (2, 4, 15, 20), (3, 5, 9, 12), (4, 4, 13, 46), (5, 5, 6, 49), (6, 5, 10, 47), (7, 6, 20, 57), (8, 7, 6, 49), (9, 7, 9, 55), (10, 8, 1, 49), (11, 7, 5, 14), (12, 6, 22, 16)], // 2036
    [(1, 5, 9, 34), (2, 3, 21, 11), (3, 5, 15, 6), (4, 4, 19, 44), (5, 5, 12, 49), (6, 5, 16, 47), (7, 7, 2, 55), (8, 7, 12, 43), (9, 7, 15, 45), (10, 8, 7, 38), (11, 7, 11, 4), (12, 7, 4, 7)], // 2037
    [(1, 5, 15, 27), (2, 4, 3, 3), (3, 5, 20, 55), (4, 5, 1, 29), (5, 5, 18, 31), (6, 5, 22, 25), (7, 7, 8, 32), (8, 7, 18, 21), (9, 7, 21, 26), (10, 8, 13, 21), (11, 7, 16, 51), (12, 7, 9, 56)], // 2038
    [(1, 5, 21, 16), (2, 4, 8, 53), (3, 6, 2, 43), (4, 5, 7, 16), (5, 6, 0, 18), (6, 6, 4, 15), (7, 7, 14, 26), (8, 8, 0, 18), (9, 8, 3, 24), (10, 8, 19, 17), (11, 7, 22, 43), (12, 7, 15, 45)], // 2039
    [(1, 6, 3, 3), (2, 4, 14, 40), (3, 5, 8, 31), (4, 4, 13, 5), (5, 5, 6, 9), (6, 5, 10, 8), (7, 6, 20, 19), (8, 7, 6, 10), (9, 7, 9, 14), (10, 8, 1, 5), (11, 7, 4, 29), (12, 6, 21, 30)], // 2040
    [(1, 5, 8, 48), (2, 3, 20, 25), (3, 5, 14, 18), (4, 4, 18, 52), (5, 5, 11, 54), (6, 5, 15, 50), (7, 7, 1, 58), (8, 7, 11, 48), (9, 7, 14, 53), (10, 8, 6, 47), (11, 7, 10, 13), (12, 7, 3, 16)], // 2041
    [(1, 5, 14, 35), (2, 4, 2, 13), (3, 5, 20, 6), (4, 5, 0, 40), (5, 5, 17, 43), (6, 5, 21, 38), (7, 7, 7, 47), (8, 7, 17, 39), (9, 7, 20, 45), (10, 8, 12, 40), (11, 7, 16, 7), (12, 7, 9, 9)], // 2042
    [(1, 5, 20, 25), (2, 4, 7, 59), (3, 6, 1, 48), (4, 5, 6, 20), (5, 5, 23, 22), (6, 6, 3, 18), (7, 7, 13, 28), (8, 7, 23, 21), (9, 8, 2, 30), (10, 8, 18, 27), (11, 7, 21, 56), (12, 7, 14, 57)], // 2043
    [(1, 6, 2, 12), (2, 4, 13, 44), (3, 5, 7, 31), (4, 4, 12, 3), (5, 5, 5, 5), (6, 5, 9, 4), (7, 6, 19, 16), (8, 7, 5, 8), (9, 7, 8, 16), (10, 8, 0, 13), (11, 7, 3, 42), (12, 6, 20, 45)], // 2044
    [(1, 5, 8, 2), (2, 3, 19, 36), (3, 5, 13, 25), (4, 4, 17, 57), (5, 5, 10, 59), (6, 5, 14, 57), (7, 7, 1, 8), (8, 7, 10, 59), (9, 7, 14, 5), (10, 8, 6, 0), (11, 7, 9, 29), (12, 7, 2, 35)], // 2045
    [(1, 5, 13, 56), (2, 4, 1, 31), (3, 5, 19, 18), (4, 4, 23, 45), (5, 5, 16, 40), (6, 5, 20, 32), (7, 7, 6, 40), (8, 7, 16, 33), (9, 7, 19, 43), (10, 8, 11, 42), (11, 7, 15, 14), (12, 7, 8, 21)], // 2046
    [(1, 5, 19, 42), (2, 4, 7, 18), (3, 6, 1, 5), (4, 5, 5, 33), (5, 5, 22, 28), (6, 6, 2, 21), (7, 7, 12, 30), (8, 7, 22, 26), (9, 8, 1, 38), (10, 8, 17, 37), (11, 7, 21, 7), (12, 7, 14, 11)], // 2047
    [(1, 6, 1, 29), (2, 4, 13, 4), (3, 5, 6, 54), (4, 4, 11, 25), (5, 5, 4, 24), (6, 5, 8, 18), (7, 6, 18, 27), (8, 7, 4, 19), (9, 7, 7, 28), (10, 7, 23, 26), (11, 7, 2, 57), (12, 6, 20, 0)], // 2048
    [(1, 5, 7, 18), (2, 3, 18, 53), (3, 5, 12, 43), (4, 4, 17, 14), (5, 5, 10, 12), (6, 5, 14, 3), (7, 7, 0, 9), (8, 7, 9, 58), (9, 7, 13, 5), (10, 8, 5, 5), (11, 7, 8, 38), (12, 7, 1, 46)], // 2049
    [(1, 5, 13, 8), (2, 4, 0, 44), (3, 5, 18, 33), (4, 4, 23, 3), (5, 5, 16, 2), (6, 5, 19, 54), (7, 7, 6, 1), (8, 7, 15, 52), (9, 7, 19, 0), (10, 8, 11, 0), (11, 7, 14, 33), (12, 7, 7, 41)], // 2050
];

/// Row for `year`, if tabulated.
pub(crate) fn table_row(year: i32) -> Option<&'static [(u8, u8, u8, u8); 12]> {
    if !(TABLE_FIRST_YEAR..=TABLE_LAST_YEAR).contains(&year) {
        return None;
    }
    SOLAR_TERM_TABLE.get((year - TABLE_FIRST_YEAR) as usize)
}
