//! Coarse land mask for the map backdrop.
//!
//! Continents and large islands are outlined as rings of `(longitude,
//! latitude)` vertices, a couple of degrees apart, which is finer than the
//! backdrop lattice needs. Inland seas that the outlines enclose are cut back
//! out.

use crate::geo::{self, Point};

const NORTH_AMERICA: &[(f64, f64)] = &[
    (-168.0, 65.5), (-163.0, 67.0), (-166.0, 68.8), (-162.0, 70.2), (-156.5, 71.3),
    (-145.0, 70.0), (-135.0, 69.3), (-128.0, 70.0), (-115.0, 68.5), (-105.0, 68.0),
    (-96.0, 68.5), (-90.0, 69.0), (-82.0, 68.0), (-80.0, 64.0), (-73.0, 62.0), (-65.0, 60.0),
    (-61.0, 56.0), (-56.0, 52.5), (-59.0, 47.5), (-64.0, 46.0), (-60.0, 45.8), (-66.0, 43.8),
    (-70.0, 43.0), (-70.0, 41.7), (-74.0, 40.5), (-76.0, 37.0), (-75.5, 35.5), (-78.0, 34.0),
    (-81.0, 31.5), (-80.0, 27.0), (-80.5, 25.2), (-82.0, 26.5), (-83.0, 29.0), (-85.0, 30.0),
    (-89.0, 30.3), (-94.0, 29.7), (-97.0, 27.8), (-97.5, 22.0), (-96.0, 19.0), (-91.0, 18.7),
    (-90.5, 21.0), (-87.0, 21.5), (-88.3, 16.0), (-84.0, 15.8), (-83.3, 11.0), (-81.5, 9.0),
    (-79.5, 9.6), (-77.4, 8.6), (-78.2, 7.5), (-80.5, 7.5), (-82.5, 8.2), (-85.7, 10.0),
    (-87.5, 13.0), (-91.0, 14.0), (-94.0, 16.0), (-97.0, 16.0), (-101.0, 17.5), (-105.5, 20.5),
    (-107.5, 24.0), (-111.0, 28.0), (-113.0, 31.0), (-114.7, 31.7), (-113.5, 29.0),
    (-112.0, 27.0), (-110.3, 24.0), (-110.0, 23.0), (-112.0, 25.0), (-114.5, 28.0),
    (-116.0, 30.0), (-117.0, 32.5), (-119.0, 34.3), (-121.0, 35.5), (-122.5, 37.5),
    (-124.0, 40.5), (-124.0, 46.0), (-124.7, 48.4), (-123.0, 49.0), (-125.0, 50.0),
    (-128.0, 51.0), (-130.0, 54.0), (-133.0, 57.5), (-136.0, 59.0), (-140.0, 59.8),
    (-146.0, 60.7), (-150.0, 61.0), (-152.0, 59.0), (-154.0, 57.5), (-158.0, 57.0),
    (-162.0, 55.4), (-158.0, 57.8), (-162.0, 58.6), (-164.5, 60.0), (-165.0, 61.5),
    (-165.0, 63.0), (-161.0, 64.5), (-166.0, 65.3),
];

const ARCTIC_ARCHIPELAGO: &[(f64, f64)] = &[
    (-120.0, 71.0), (-125.0, 74.0), (-118.0, 77.0), (-105.0, 79.0), (-90.0, 81.0),
    (-75.0, 83.0), (-62.0, 82.0), (-70.0, 79.0), (-80.0, 76.0), (-78.0, 73.0), (-70.0, 70.0),
    (-62.0, 67.0), (-66.0, 62.5), (-73.0, 64.0), (-80.0, 66.0), (-85.0, 70.0), (-92.0, 72.0),
    (-100.0, 73.0), (-110.0, 72.5),
];

const GREENLAND: &[(f64, f64)] = &[
    (-73.0, 78.0), (-66.0, 81.0), (-55.0, 82.5), (-35.0, 83.5), (-20.0, 82.0), (-18.0, 79.0),
    (-20.0, 75.0), (-22.0, 71.0), (-25.0, 69.0), (-32.0, 68.0), (-40.0, 65.0), (-43.0, 60.0),
    (-48.0, 61.0), (-51.0, 64.0), (-53.0, 67.0), (-55.0, 70.0), (-58.0, 75.5), (-67.0, 76.5),
];

const ICELAND: &[(f64, f64)] = &[
    (-24.0, 65.5), (-22.0, 66.4), (-16.0, 66.5), (-13.5, 65.2), (-15.0, 64.3), (-18.0, 63.4),
    (-22.5, 63.8),
];

const CUBA: &[(f64, f64)] = &[
    (-85.0, 21.8), (-82.0, 23.2), (-77.5, 22.0), (-74.1, 20.2), (-77.7, 19.9), (-80.0, 21.7),
];

const HISPANIOLA: &[(f64, f64)] = &[
    (-74.5, 18.5), (-72.5, 19.9), (-69.0, 19.8), (-68.3, 18.6), (-71.5, 17.7),
];

const SOUTH_AMERICA: &[(f64, f64)] = &[
    (-77.5, 8.6), (-75.5, 10.5), (-72.0, 12.0), (-71.5, 11.0), (-68.0, 10.6), (-63.0, 10.7),
    (-61.0, 10.0), (-57.0, 6.0), (-52.0, 5.0), (-50.0, 1.5), (-48.5, -1.0), (-44.0, -2.5),
    (-39.0, -3.5), (-35.0, -5.5), (-35.0, -9.0), (-38.5, -13.0), (-39.0, -17.5),
    (-40.0, -20.5), (-42.0, -23.0), (-45.0, -23.8), (-48.5, -26.0), (-48.7, -28.5),
    (-51.0, -31.0), (-53.5, -34.0), (-57.0, -36.0), (-57.5, -38.0), (-62.0, -39.0),
    (-65.0, -41.0), (-65.0, -45.0), (-67.5, -46.5), (-66.0, -48.0), (-69.0, -51.0),
    (-68.5, -52.5), (-70.0, -54.5), (-72.0, -54.0), (-75.0, -51.0), (-74.0, -47.0),
    (-74.0, -43.0), (-73.5, -39.0), (-73.5, -37.0), (-71.5, -32.0), (-71.5, -28.0),
    (-70.5, -23.0), (-70.3, -18.5), (-72.0, -17.0), (-76.0, -14.0), (-78.0, -10.0),
    (-79.5, -7.0), (-81.2, -6.0), (-80.5, -3.5), (-80.0, -1.0), (-80.5, 1.0), (-78.8, 1.5),
    (-77.5, 4.0), (-77.5, 7.0),
];

const AFRICA: &[(f64, f64)] = &[
    (-17.0, 21.0), (-16.0, 24.0), (-14.0, 27.0), (-11.0, 29.0), (-9.8, 31.5), (-6.0, 35.8),
    (-2.0, 35.1), (3.0, 36.8), (10.0, 37.3), (11.0, 33.5), (15.0, 32.3), (20.0, 30.8),
    (20.0, 32.5), (25.0, 32.0), (29.0, 30.9), (32.0, 31.3), (32.5, 29.9), (33.5, 27.0),
    (35.5, 23.5), (37.2, 20.0), (38.5, 17.5), (39.7, 15.2), (41.5, 13.5), (43.3, 12.5),
    (43.2, 11.5), (45.0, 10.5), (51.0, 11.8), (51.0, 10.5), (49.0, 6.0), (46.0, 2.0),
    (42.0, -1.0), (40.0, -3.0), (39.0, -6.5), (40.0, -10.5), (40.5, -15.0), (35.0, -20.0),
    (35.5, -24.0), (32.5, -26.0), (32.5, -29.0), (30.0, -31.5), (27.0, -33.8), (22.0, -34.0),
    (18.5, -34.2), (18.0, -31.0), (16.0, -28.5), (14.5, -22.5), (11.8, -17.0), (13.5, -12.0),
    (13.0, -8.5), (12.0, -5.0), (9.5, -1.0), (9.5, 3.0), (8.5, 4.5), (5.5, 4.3), (2.0, 6.3),
    (-2.0, 4.8), (-7.5, 4.4), (-11.0, 6.8), (-13.0, 8.5), (-15.0, 11.0), (-17.0, 14.7),
    (-16.5, 19.0),
];

const MADAGASCAR: &[(f64, f64)] = &[
    (49.3, -12.0), (50.4, -15.5), (49.5, -17.0), (48.0, -22.0), (47.0, -25.0), (45.0, -25.5),
    (43.5, -22.0), (44.0, -18.0), (44.5, -16.0), (46.5, -15.5), (48.0, -13.5),
];

const EURASIA: &[(f64, f64)] = &[
    (-9.5, 37.0), (-9.5, 43.0), (-8.0, 43.7), (-1.5, 43.4), (-1.2, 46.0), (-4.5, 48.0),
    (-1.5, 48.7), (1.5, 50.3), (4.0, 51.5), (5.0, 53.3), (8.5, 54.0), (8.3, 57.0),
    (10.5, 57.7), (7.0, 58.0), (5.0, 60.0), (5.0, 62.0), (10.0, 64.0), (14.0, 67.5),
    (18.0, 69.5), (25.0, 71.0), (30.0, 70.0), (33.0, 69.3), (41.0, 67.0), (44.0, 68.5),
    (53.0, 68.5), (60.0, 69.0), (68.0, 69.0), (73.0, 72.0), (80.0, 73.5), (90.0, 75.5),
    (100.0, 77.0), (105.0, 77.5), (113.0, 73.7), (125.0, 73.5), (140.0, 72.5), (152.0, 71.0),
    (160.0, 70.0), (170.0, 70.0), (180.0, 68.5), (180.0, 65.0), (178.0, 64.5), (177.0, 62.5),
    (170.0, 60.0), (163.0, 59.8), (162.0, 57.0), (156.0, 51.0), (155.5, 57.0), (160.5, 61.0),
    (155.0, 59.3), (151.0, 59.0), (142.0, 59.0), (135.0, 54.5), (141.0, 52.0), (140.0, 48.0),
    (135.0, 43.5), (130.0, 42.5), (129.5, 36.0), (126.5, 34.5), (126.0, 37.5), (124.5, 39.8),
    (122.0, 40.0), (118.0, 39.0), (121.0, 37.5), (122.5, 37.0), (119.0, 35.0), (121.0, 32.0),
    (122.0, 30.0), (120.0, 26.5), (117.0, 23.5), (113.0, 22.3), (110.0, 21.0), (108.0, 21.5),
    (106.0, 20.0), (106.5, 18.0), (108.5, 15.0), (109.0, 11.5), (107.0, 10.4), (105.0, 8.6),
    (104.5, 10.5), (103.0, 11.0), (101.0, 12.7), (99.5, 10.5), (100.3, 6.5), (103.4, 3.8),
    (104.2, 1.4), (101.0, 2.8), (98.0, 8.0), (98.5, 13.0), (97.5, 16.5), (94.5, 16.0),
    (94.0, 19.0), (92.0, 21.5), (90.5, 22.0), (89.0, 21.8), (87.0, 21.5), (86.0, 19.8),
    (84.0, 18.3), (80.3, 15.5), (80.0, 12.0), (79.8, 10.0), (77.5, 8.0), (76.3, 9.5),
    (74.8, 13.0), (73.0, 17.0), (72.8, 21.0), (70.0, 21.0), (68.5, 23.5), (66.5, 25.4),
    (61.5, 25.1), (57.5, 25.8), (56.3, 27.0), (54.0, 26.7), (51.5, 27.9), (50.0, 30.0),
    (48.0, 30.0), (48.5, 28.5), (50.0, 26.0), (51.5, 24.5), (53.0, 24.2), (56.0, 26.0),
    (56.4, 24.7), (58.8, 22.5), (59.8, 22.3), (57.8, 19.0), (55.0, 17.0), (52.0, 16.0),
    (45.0, 13.0), (43.3, 12.7), (42.8, 14.8), (41.0, 19.0), (39.0, 21.5), (37.0, 25.5),
    (35.0, 28.0), (34.9, 29.5), (34.3, 27.8), (32.7, 29.8), (34.2, 31.3), (35.0, 33.0),
    (36.0, 35.8), (36.0, 36.8), (32.0, 36.2), (28.0, 36.7), (26.3, 39.2), (26.6, 40.3),
    (26.0, 40.8), (24.0, 40.7), (23.7, 37.9), (22.5, 36.4), (21.5, 37.0), (21.0, 38.5),
    (19.5, 40.0), (19.5, 41.8), (17.0, 43.2), (15.0, 45.0), (13.8, 45.6), (12.3, 45.3),
    (13.5, 43.6), (16.0, 41.5), (18.5, 40.2), (17.0, 39.0), (16.0, 38.0), (15.7, 40.0),
    (12.5, 41.5), (10.5, 43.0), (9.0, 44.4), (6.5, 43.1), (3.2, 43.3), (3.0, 42.0),
    (0.0, 38.8), (-2.0, 36.7), (-5.6, 36.0), (-6.5, 36.8), (-8.9, 37.0),
];

const CHUKOTKA_EAST: &[(f64, f64)] = &[
    (-180.0, 68.5), (-175.0, 67.5), (-170.0, 66.0), (-172.0, 64.5), (-180.0, 65.0),
];

const BRITAIN: &[(f64, f64)] = &[
    (-5.7, 50.0), (1.4, 51.2), (1.7, 52.7), (0.0, 53.5), (-1.6, 55.5), (-2.0, 57.5),
    (-3.3, 58.6), (-5.0, 58.6), (-6.2, 56.5), (-5.0, 55.0), (-3.0, 54.0), (-4.5, 53.3),
    (-5.0, 51.7), (-3.0, 51.4),
];

const IRELAND: &[(f64, f64)] = &[
    (-10.0, 51.6), (-6.0, 52.0), (-6.0, 53.9), (-5.7, 55.2), (-7.5, 55.3), (-10.0, 54.2),
    (-10.0, 53.0),
];

const SVALBARD: &[(f64, f64)] = &[
    (11.0, 78.5), (16.0, 80.0), (27.0, 80.0), (22.0, 77.5), (16.0, 76.5),
];

const NOVAYA_ZEMLYA: &[(f64, f64)] = &[
    (52.0, 71.5), (56.0, 73.5), (60.0, 76.0), (68.0, 77.0), (60.0, 74.5), (56.0, 71.0),
];

const SAKHALIN: &[(f64, f64)] = &[
    (142.0, 46.0), (143.5, 49.5), (143.0, 54.0), (142.5, 54.3), (141.8, 51.0),
];

const JAPAN: &[(f64, f64)] = &[
    (130.0, 31.0), (132.0, 33.9), (135.0, 33.5), (140.0, 35.0), (141.0, 38.0), (142.0, 40.0),
    (141.5, 41.5), (144.0, 43.0), (145.5, 43.3), (142.0, 45.5), (140.0, 43.2), (140.0, 40.5),
    (139.5, 38.5), (136.5, 37.0), (133.0, 35.5), (130.8, 34.3), (129.7, 33.0),
];

const TAIWAN: &[(f64, f64)] = &[
    (120.1, 23.0), (121.0, 25.2), (122.0, 25.0), (121.5, 23.0), (120.8, 21.9),
];

const SRI_LANKA: &[(f64, f64)] = &[
    (79.8, 6.2), (79.9, 9.7), (81.3, 8.5), (81.8, 7.0), (80.6, 5.9),
];

const PHILIPPINES: &[(f64, f64)] = &[
    (120.5, 18.5), (122.3, 18.5), (122.0, 14.0), (124.0, 12.5), (126.0, 9.0), (126.0, 6.5),
    (125.0, 6.0), (122.0, 7.0), (123.5, 10.0), (121.0, 13.5), (120.0, 14.8),
];

const SUMATRA: &[(f64, f64)] = &[
    (95.3, 5.6), (97.5, 5.2), (100.5, 2.0), (104.0, -1.0), (106.0, -3.5), (105.8, -5.8),
    (104.0, -5.5), (101.5, -3.0), (99.0, 0.0), (96.0, 3.5),
];

const JAVA: &[(f64, f64)] = &[
    (105.2, -6.8), (106.0, -5.9), (111.0, -6.4), (114.5, -7.7), (114.5, -8.8), (110.0, -8.2),
    (106.0, -7.4),
];

const BORNEO: &[(f64, f64)] = &[
    (109.0, 1.5), (110.0, 1.8), (111.5, 2.5), (113.5, 3.5), (116.0, 6.5), (117.5, 6.5),
    (119.0, 5.0), (118.0, 1.0), (117.5, -1.0), (116.0, -3.8), (114.5, -3.5), (111.0, -3.0),
    (110.0, -1.5), (109.0, -0.5),
];

const SULAWESI: &[(f64, f64)] = &[
    (119.5, -5.5), (120.5, -5.5), (121.0, -2.0), (123.0, -1.0), (125.0, 1.5), (120.5, 0.5),
    (119.0, -3.0),
];

const NEW_GUINEA: &[(f64, f64)] = &[
    (131.0, -1.0), (135.0, -3.3), (138.0, -1.5), (141.0, -2.6), (145.7, -4.8), (147.5, -6.2),
    (150.0, -10.3), (147.0, -10.0), (143.5, -9.0), (142.0, -9.2), (138.0, -8.4), (137.5, -5.0),
    (134.0, -4.0), (132.0, -2.5),
];

const AUSTRALIA: &[(f64, f64)] = &[
    (113.5, -22.0), (114.0, -26.0), (115.0, -30.0), (115.0, -34.0), (118.0, -35.0),
    (124.0, -33.8), (129.0, -31.6), (131.5, -31.5), (135.0, -34.5), (137.8, -32.5),
    (138.0, -35.5), (140.0, -37.8), (144.0, -38.4), (146.5, -39.0), (150.0, -37.5),
    (151.5, -33.0), (153.6, -28.0), (153.0, -25.0), (150.8, -22.5), (149.0, -20.5),
    (146.0, -18.0), (145.3, -15.0), (143.5, -14.0), (142.5, -10.7), (141.6, -12.5),
    (141.5, -17.0), (139.5, -17.4), (136.0, -15.8), (136.8, -12.2), (132.5, -11.5),
    (130.0, -13.0), (129.5, -15.0), (127.5, -14.0), (125.0, -15.0), (122.0, -17.5),
    (121.0, -19.6), (117.0, -20.7),
];

const TASMANIA: &[(f64, f64)] = &[
    (144.6, -40.7), (148.3, -40.9), (148.0, -43.2), (146.0, -43.6),
];

const NEW_ZEALAND_NORTH: &[(f64, f64)] = &[
    (172.6, -34.4), (174.5, -36.0), (178.5, -37.7), (177.0, -39.3), (175.0, -41.6),
    (174.5, -39.8), (173.8, -39.2),
];

const NEW_ZEALAND_SOUTH: &[(f64, f64)] = &[
    (172.6, -40.5), (174.3, -41.5), (172.8, -43.8), (171.0, -44.9), (169.0, -46.6),
    (166.5, -46.0), (168.0, -44.0), (170.5, -42.8),
];

// Enclosed by the outlines above but drawn as water
const HUDSON_BAY: &[(f64, f64)] = &[
    (-95.0, 59.0), (-94.0, 61.0), (-90.0, 64.0), (-86.0, 65.5), (-82.0, 64.0), (-78.0, 62.5),
    (-77.0, 60.0), (-77.0, 58.0), (-79.0, 55.0), (-80.0, 51.5), (-82.0, 52.5), (-83.0, 55.0),
    (-88.0, 56.5), (-93.0, 58.0),
];

const BLACK_SEA: &[(f64, f64)] = &[
    (27.5, 42.0), (28.0, 44.0), (29.7, 45.3), (31.0, 46.6), (33.5, 46.0), (35.0, 45.3),
    (37.5, 47.0), (39.0, 47.2), (38.0, 45.0), (39.8, 43.5), (41.5, 41.5), (38.0, 41.0),
    (35.0, 42.0), (31.0, 41.2), (29.0, 41.2),
];

const CASPIAN_SEA: &[(f64, f64)] = &[
    (47.0, 44.5), (49.0, 46.5), (52.0, 47.0), (53.5, 45.5), (51.0, 44.0), (52.5, 42.0),
    (54.0, 40.5), (53.5, 37.5), (51.0, 36.8), (49.0, 38.0), (49.5, 40.3), (48.0, 42.0),
];

const BALTIC_SEA: &[(f64, f64)] = &[
    (10.5, 54.5), (14.0, 54.0), (18.0, 54.8), (21.0, 55.0), (21.0, 57.0), (23.5, 57.5),
    (24.0, 59.4), (28.0, 59.8), (29.5, 60.0), (26.0, 60.5), (22.0, 60.2), (21.5, 62.0),
    (22.0, 64.0), (25.0, 65.0), (25.3, 65.8), (22.0, 65.8), (21.0, 64.7), (19.0, 63.3),
    (17.5, 62.3), (17.0, 60.7), (18.5, 59.7), (16.5, 57.0), (14.5, 56.2), (12.8, 55.6),
    (11.5, 57.7), (10.5, 57.7),
];

const LAND: &[&[(f64, f64)]] = &[
    NORTH_AMERICA,
    ARCTIC_ARCHIPELAGO,
    GREENLAND,
    ICELAND,
    CUBA,
    HISPANIOLA,
    SOUTH_AMERICA,
    AFRICA,
    MADAGASCAR,
    EURASIA,
    CHUKOTKA_EAST,
    BRITAIN,
    IRELAND,
    SVALBARD,
    NOVAYA_ZEMLYA,
    SAKHALIN,
    JAPAN,
    TAIWAN,
    SRI_LANKA,
    PHILIPPINES,
    SUMATRA,
    JAVA,
    BORNEO,
    SULAWESI,
    NEW_GUINEA,
    AUSTRALIA,
    TASMANIA,
    NEW_ZEALAND_NORTH,
    NEW_ZEALAND_SOUTH,
];

const WATER: &[&[(f64, f64)]] = &[HUDSON_BAY, BLACK_SEA, CASPIAN_SEA, BALTIC_SEA];

/// Even-odd ray cast against one closed ring.
fn ring_contains(ring: &[(f64, f64)], lng: f64, lat: f64) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for (i, &(xi, yi)) in ring.iter().enumerate() {
        let (xj, yj) = ring[j];
        if (yi > lat) != (yj > lat) && lng < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether a coordinate falls on land. NaN input is never land.
pub fn is_land(lat: f64, lng: f64) -> bool {
    LAND.iter().any(|ring| ring_contains(ring, lng, lat))
        && !WATER.iter().any(|ring| ring_contains(ring, lng, lat))
}

/// Lattice points whose geographic position is land: the dotted world map.
pub fn land_dots(step: f64) -> Vec<Point> {
    geo::lattice(step)
        .into_iter()
        .filter(|p| {
            let (lat, lng) = geo::unproject(*p);
            is_land(lat, lng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_dot_near(dots: &[Point], lat: f64, lng: f64, radius: f64) -> bool {
        let target = geo::project(lat, lng);
        dots.iter()
            .any(|p| (p.x - target.x).abs() <= radius && (p.y - target.y).abs() <= radius)
    }

    #[test]
    fn test_open_ocean_is_water() {
        assert!(!is_land(0.0, -150.0)); // mid-Pacific
        assert!(!is_land(30.0, -40.0)); // mid-Atlantic
        assert!(!is_land(-20.0, 80.0)); // Indian Ocean
    }

    #[test]
    fn test_map_cities_are_land() {
        assert!(is_land(34.0522, -118.2437)); // Los Angeles
        assert!(is_land(-15.7942, -47.8822)); // Brasília
        assert!(is_land(51.1657, 10.4515)); // central Germany
        assert!(is_land(-1.2921, 36.8219)); // Nairobi
        assert!(is_land(43.1332, 131.9113)); // Vladivostok
        assert!(is_land(28.6139, 77.2090)); // New Delhi
        assert!(is_land(61.2181, -149.9003)); // Anchorage
        assert!(is_land(38.7223, -9.1393)); // Lisbon
    }

    #[test]
    fn test_inland_seas_are_cut_out() {
        assert!(!is_land(43.5, 34.0)); // Black Sea
        assert!(!is_land(42.0, 51.0)); // Caspian Sea
        assert!(!is_land(60.0, -86.0)); // Hudson Bay
        assert!(!is_land(58.0, 20.0)); // Baltic Sea
    }

    #[test]
    fn test_nan_is_not_land() {
        assert!(!is_land(f64::NAN, 0.0));
        assert!(!is_land(0.0, f64::NAN));
    }

    #[test]
    fn test_land_dots_trace_continents_only() {
        let step = 5.0;
        let dots = land_dots(step);
        let all = geo::lattice(step).len();
        assert!(dots.len() > all / 10 && dots.len() < all / 2, "{} of {all}", dots.len());
        assert!(!has_dot_near(&dots, 0.0, -150.0, step));
        assert!(has_dot_near(&dots, 51.1657, 10.4515, step));
    }
}
