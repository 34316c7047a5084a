// asin lookup table: one sample per raw step, increasing angle.
pub static ASIN_TABLE: [i64; 65537] = [
    0, 1, 2, 3, 4, 5, 6, 7,
    8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39,
    40, 41, 42, 43, 44, 45, 46, 47,
    48, 49, 50, 51, 52, 53, 54, 55,
    56, 57, 58, 59, 60, 61, 62, 63,
    64, 65, 66, 67, 68, 69, 70, 71,
    72, 73, 74, 75, 76, 77, 78, 79,
    80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95,
    96, 97, 98, 99, 100, 101, 102, 103,
    104, 105, 106, 107, 108, 109, 110, 111,
    112, 113, 114, 115, 116, 117, 118, 119,
    120, 121, 122, 123, 124, 125, 126, 127,
    128, 129, 130, 131, 132, 133, 134, 135,
    136, 137, 138, 139, 140, 141, 142, 143,
    144, 145, 146, 147, 148, 149, 150, 151,
    152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 167,
    168, 169, 170, 171, 172, 173, 174, 175,
    176, 177, 178, 179, 180, 181, 182, 183,
    184, 185, 186, 187, 188, 189, 190, 191,
    192, 193, 194, 195, 196, 197, 198, 199,
    200, 201, 202, 203, 204, 205, 206, 207,
    208, 209, 210, 211, 212, 213, 214, 215,
    216, 217, 218, 219, 220, 221, 222, 223,
    224, 225, 226, 227, 228, 229, 230, 231,
    232, 233, 234, 235, 236, 237, 238, 239,
    240, 241, 242, 243, 244, 245, 246, 247,
    248, 249, 250, 251, 252, 253, 254, 255,
    256, 257, 258, 259, 260, 261, 262, 263,
    264, 265, 266, 267, 268, 269, 270, 271,
    272, 273, 274, 275, 276, 277, 278, 279,
    280, 281, 282, 283, 284, 285, 286, 287,
    288, 289, 290, 291, 292, 293, 294, 295,
    296, 297, 298, 299, 300, 301, 302, 303,
    304, 305, 306, 307, 308, 309, 310, 311,
    312, 313, 314, 315, 316, 317, 318, 319,
    320, 321, 322, 323, 324, 325, 326, 327,
    328, 329, 330, 331, 332, 333, 334, 335,
    336, 337, 338, 339, 340, 341, 342, 343,
    344, 345, 346, 347, 348, 349, 350, 351,
    352, 353, 354, 355, 356, 357, 358, 359,
    360, 361, 362, 363, 364, 365, 366, 367,
    368, 369, 370, 371, 372, 373, 374, 375,
    376, 377, 378, 379, 380, 381, 382, 383,
    384, 385, 386, 387, 388, 389, 390, 391,
    392, 393, 394, 395, 396, 397, 398, 399,
    400, 401, 402, 403, 404, 405, 406, 407,
    408, 409, 410, 411, 412, 413, 414, 415,
    416, 417, 418, 419, 420, 421, 422, 423,
    424, 425, 426, 427, 428, 429, 430, 431,
    432, 433, 434, 435, 436, 437, 438, 439,
    440, 441, 442, 443, 444, 445, 446, 447,
    448, 449, 450, 451, 452, 453, 454, 455,
    456, 457, 458, 459, 460, 461, 462, 463,
    464, 465, 466, 467, 468, 469, 470, 471,
    472, 473, 474, 475, 476, 477, 478, 479,
    480, 481, 482, 483, 484, 485, 486, 487,
    488, 489, 490, 491, 492, 493, 494, 495,
    496, 497, 498, 499, 500, 501, 502, 503,
    504, 505, 506, 507, 508, 509, 510, 511,
    512, 513, 514, 515, 516, 517, 518, 519,
    520, 521, 522, 523, 524, 525, 526, 527,
    528, 529, 530, 531, 532, 533, 534, 535,
    536, 537, 538, 539, 540, 541, 542, 543,
    544, 545, 546, 547, 548, 549, 550, 551,
    552, 553, 554, 555, 556, 557, 558, 559,
    560, 561, 562, 563, 564, 565, 566, 567,
    568, 569, 570, 571, 572, 573, 574, 575,
    576, 577, 578, 579, 580, 581, 582, 583,
    584, 585, 586, 587, 588, 589, 590, 591,
    592, 593, 594, 595, 596, 597, 598, 599,
    600, 601, 602, 603, 604, 605, 606, 607,
    608, 609, 610, 611, 612, 613, 614, 615,
    616, 617, 618, 619, 620, 621, 622, 623,
    624, 625, 626, 627, 628, 629, 630, 631,
    632, 633, 634, 635, 636, 637, 638, 639,
    640, 641, 642, 643, 644, 645, 646, 647,
    648, 649, 650, 651, 652, 653, 654, 655,
    656, 657, 658, 659, 660, 661, 662, 663,
    664, 665, 666, 667, 668, 669, 670, 671,
    672, 673, 674, 675, 676, 677, 678, 679,
    680, 681, 682, 683, 684, 685, 686, 687,
    688, 689, 690, 691, 692, 693, 694, 695,
    696, 697, 698, 699, 700, 701, 702, 703,
    704, 705, 706, 707, 708, 709, 710, 711,
    712, 713, 714, 715, 716, 717, 718, 719,
    720, 721, 722, 723, 724, 725, 726, 727,
    728, 729, 730, 731, 732, 733, 734, 735,
    736, 737, 738, 739, 740, 741, 742, 743,
    744, 745, 746, 747, 748, 749, 750, 751,
    752, 753, 754, 755, 756, 757, 758, 759,
    760, 761, 762, 763, 764, 765, 766, 767,
    768, 769, 770, 771, 772, 773, 774, 775,
    776, 777, 778, 779, 780, 781, 782, 783,
    784, 785, 786, 787, 788, 789, 790, 791,
    792, 793, 794, 795, 796, 797, 798, 799,
    800, 801, 802, 803, 804, 805, 806, 807,
    808, 809, 810, 811, 812, 813, 814, 815,
    816, 817, 818, 819, 820, 821, 822, 823,
    824, 825, 826, 827, 828, 829, 830, 831,
    832, 833, 834, 835, 836, 837, 838, 839,
    840, 841, 842, 843, 844, 845, 846, 847,
    848, 849, 850, 851, 852, 853, 854, 855,
    856, 857, 858, 859, 860, 861, 862, 863,
    864, 865, 866, 867, 868, 869, 870, 871,
    872, 873, 874, 875, 876, 877, 878, 879,
    880, 881, 882, 883, 884, 885, 886, 887,
    888, 889, 890, 891, 892, 893, 894, 895,
    896, 897, 898, 899, 900, 901, 902, 903,
    904, 905, 906, 907, 908, 909, 910, 911,
    912, 913, 914, 915, 916, 917, 918, 919,
    920, 921, 922, 923, 924, 925, 926, 927,
    928, 929, 930, 931, 932, 933, 934, 935,
    936, 937, 938, 939, 940, 941, 942, 943,
    944, 945, 946, 947, 948, 949, 950, 951,
    952, 953, 954, 955, 956, 957, 958, 959,
    960, 961, 962, 963, 964, 965, 966, 967,
    968, 969, 970, 971, 972, 973, 974, 975,
    976, 977, 978, 979, 980, 981, 982, 983,
    984, 985, 986, 987, 988, 989, 990, 991,
    992, 993, 994, 995, 996, 997, 998, 999,
    1000, 1001, 1002, 1003, 1004, 1005, 1006, 1007,
    1008, 1009, 1010, 1011, 1012, 1013, 1014, 1015,
    1016, 1017, 1018, 1019, 1020, 1021, 1022, 1023,
    1024, 1025, 1026, 1027, 1028, 1029, 1030, 1031,
    1032, 1033, 1034, 1035, 1036, 1037, 1038, 1039,
    1040, 1041, 1042, 1043, 1044, 1045, 1046, 1047,
    1048, 1049, 1050, 1051, 1052, 1053, 1054, 1055,
    1056, 1057, 1058, 1059, 1060, 1061, 1062, 1063,
    1064, 1065, 1066, 1067, 1068, 1069, 1070, 1071,
    1072, 1073, 1074, 1075, 1076, 1077, 1078, 1079,
    1080, 1081, 1082, 1083, 1084, 1085, 1086, 1087,
    1088, 1089, 1090, 1091, 1092, 1093, 1094, 1095,
    1096, 1097, 1098, 1099, 1100, 1101, 1102, 1103,
    1104, 1105, 1106, 1107, 1108, 1109, 1110, 1111,
    1112, 1113, 1114, 1115, 1116, 1117, 1118, 1119,
    1120, 1121, 1122, 1123, 1124, 1125, 1126, 1127,
    1128, 1129, 1130, 1131, 1132, 1133, 1134, 1135,
    1136, 1137, 1138, 1139, 1140, 1141, 1142, 1143,
    1144, 1145, 1146, 1147, 1148, 1149, 1150, 1151,
    1152, 1153, 1154, 1155, 1156, 1157, 1158, 1159,
    1160, 1161, 1162, 1163, 1164, 1165, 1166, 1167,
    1168, 1169, 1170, 1171, 1172, 1173, 1174, 1175,
    1176, 1177, 1178, 1179, 1180, 1181, 1182, 1183,
    1184, 1185, 1186, 1187, 1188, 1189, 1190, 1191,
    1192, 1193, 1194, 1195, 1196, 1197, 1198, 1199,
    1200, 1201, 1202, 1203, 1204, 1205, 1206, 1207,
    1208, 1209, 1210, 1211, 1212, 1213, 1214, 1215,
    1216, 1217, 1218, 1219, 1220, 1221, 1222, 1223,
    1224, 1225, 1226, 1227, 1228, 1229, 1230, 1231,
    1232, 1233, 1234, 1235, 1236, 1237, 1238, 1239,
    1240, 1241, 1242, 1243, 1244, 1245, 1246, 1247,
    1248, 1249, 1250, 1251, 1252, 1253, 1254, 1255,
    1256, 1257, 1258, 1259, 1260, 1261, 1262, 1263,
    1264, 1265, 1266, 1267, 1268, 1269, 1270, 1271,
    1272, 1273, 1274, 1275, 1276, 1277, 1278, 1279,
    1280, 1281, 1282, 1283, 1284, 1285, 1286, 1287,
    1288, 1289, 1290, 1291, 1292, 1293, 1294, 1295,
    1296, 1297, 1298, 1299, 1300, 1301, 1302, 1303,
    1304, 1305, 1306, 1307, 1308, 1309, 1310, 1311,
    1312, 1313, 1314, 1315, 1316, 1317, 1318, 1319,
    1320, 1321, 1322, 1323, 1324, 1325, 1326, 1327,
    1328, 1329, 1330, 1331, 1332, 1333, 1334, 1335,
    1336, 1337, 1338, 1339, 1340, 1341, 1342, 1343,
    1344, 1345, 1346, 1347, 1348, 1349, 1350, 1351,
    1352, 1353, 1354, 1355, 1356, 1357, 1358, 1359,
    1360, 1361, 1362, 1363, 1364, 1365, 1366, 1367,
    1368, 1369, 1370, 1371, 1372, 1373, 1374, 1375,
    1376, 1377, 1378, 1379, 1380, 1381, 1382, 1383,
    1384, 1385, 1386, 1387, 1388, 1389, 1390, 1391,
    1392, 1393, 1394, 1395, 1396, 1397, 1398, 1399,
    1400, 1401, 1402, 1403, 1404, 1405, 1406, 1407,
    1408, 1409, 1410, 1411, 1412, 1413, 1414, 1415,
    1416, 1417, 1418, 1419, 1420, 1421, 1422, 1423,
    1424, 1425, 1426, 1427, 1428, 1429, 1430, 1431,
    1432, 1433, 1434, 1435, 1436, 1437, 1438, 1439,
    1440, 1441, 1442, 1443, 1444, 1445, 1446, 1447,
    1448, 1449, 1450, 1451, 1452, 1453, 1454, 1455,
    1456, 1457, 1458, 1459, 1460, 1461, 1462, 1463,
    1464, 1465, 1466, 1467, 1468, 1469, 1470, 1471,
    1472, 1473, 1474, 1475, 1476, 1477, 1478, 1479,
    1480, 1481, 1482, 1483, 1484, 1485, 1486, 1487,
    1488, 1489, 1490, 1491, 1492, 1493, 1494, 1495,
    1496, 1497, 1498, 1499, 1500, 1501, 1502, 1503,
    1504, 1505, 1506, 1507, 1508, 1509, 1510, 1511,
    1512, 1513, 1514, 1515, 1516, 1517, 1518, 1519,
    1520, 1521, 1522, 1523, 1524, 1525, 1526, 1527,
    1528, 1529, 1530, 1531, 1532, 1533, 1534, 1535,
    1536, 1537, 1538, 1539, 1540, 1541, 1542, 1543,
    1544, 1545, 1546, 1547, 1548, 1549, 1550, 1551,
    1552, 1553, 1554, 1555, 1556, 1557, 1558, 1559,
    1560, 1561, 1562, 1563, 1564, 1565, 1566, 1567,
    1568, 1569, 1570, 1571, 1572, 1573, 1574, 1575,
    1576, 1577, 1578, 1579, 1580, 1581, 1582, 1583,
    1584, 1585, 1586, 1587, 1588, 1589, 1590, 1591,
    1592, 1593, 1594, 1595, 1596, 1597, 1598, 1599,
    1600, 1601, 1602, 1603, 1604, 1605, 1606, 1607,
    1608, 1609, 1610, 1611, 1612, 1613, 1614, 1615,
    1616, 1617, 1618, 1619, 1620, 1621, 1622, 1623,
    1624, 1625, 1626, 1627, 1628, 1629, 1630, 1631,
    1632, 1633, 1634, 1635, 1636, 1637, 1638, 1639,
    1640, 1641, 1642, 1643, 1644, 1645, 1646, 1647,
    1648, 1649, 1650, 1651, 1652, 1653, 1654, 1655,
    1656, 1657, 1658, 1659, 1660, 1661, 1662, 1663,
    1664, 1665, 1666, 1667, 1668, 1669, 1670, 1671,
    1672, 1673, 1674, 1675, 1676, 1677, 1678, 1679,
    1680, 1681, 1682, 1683, 1684, 1685, 1686, 1687,
    1688, 1689, 1690, 1691, 1692, 1693, 1694, 1695,
    1696, 1697, 1698, 1699, 1700, 1701, 1702, 1703,
    1704, 1705, 1706, 1707, 1708, 1709, 1710, 1711,
    1712, 1713, 1714, 1715, 1716, 1717, 1718, 1719,
    1720, 1721, 1722, 1723, 1724, 1725, 1726, 1727,
    1728, 1729, 1730, 1731, 1732, 1733, 1734, 1735,
    1736, 1737, 1738, 1739, 1740, 1741, 1742, 1743,
    1744, 1745, 1746, 1747, 1748, 1749, 1750, 1751,
    1752, 1753, 1754, 1755, 1756, 1757, 1758, 1759,
    1760, 1761, 1762, 1763, 1764, 1765, 1766, 1767,
    1768, 1769, 1770, 1771, 1772, 1773, 1774, 1775,
    1776, 1777, 1778, 1779, 1780, 1781, 1782, 1783,
    1784, 1785, 1786, 1787, 1788, 1789, 1790, 1791,
    1792, 1793, 1794, 1795, 1796, 1797, 1798, 1799,
    1800, 1801, 1802, 1803, 1804, 1805, 1806, 1807,
    1808, 1809, 1810, 1811, 1812, 1813, 1814, 1815,
    1816, 1817, 1818, 1819, 1820, 1821, 1822, 1823,
    1824, 1825, 1826, 1827, 1828, 1829, 1830, 1831,
    1832, 1833, 1834, 1835, 1836, 1837, 1838, 1839,
    1840, 1841, 1842, 1843, 1844, 1845, 1846, 1847,
    1848, 1849, 1850, 1851, 1852, 1853, 1854, 1855,
    1856, 1857, 1858, 1859, 1860, 1861, 1862, 1863,
    1864, 1865, 1866, 1867, 1868, 1869, 1870, 1871,
    1872, 1873, 1874, 1875, 1876, 1877, 1878, 1879,
    1880, 1881, 1882, 1883, 1884, 1885, 1886, 1887,
    1888, 1889, 1890, 1891, 1892, 1893, 1894, 1895,
    1896, 1897, 1898, 1899, 1900, 1901, 1902, 1903,
    1904, 1905, 1906, 1907, 1908, 1909, 1910, 1911,
    1912, 1913, 1914, 1915, 1916, 1917, 1918, 1919,
    1920, 1921, 1922, 1923, 1924, 1925, 1926, 1927,
    1928, 1929, 1930, 1931, 1932, 1933, 1934, 1935,
    1936, 1937, 1938, 1939, 1940, 1941, 1942, 1943,
    1944, 1945, 1946, 1947, 1948, 1949, 1950, 1951,
    1952, 1953, 1954, 1955, 1956, 1957, 1958, 1959,
    1960, 1961, 1962, 1963, 1964, 1965, 1966, 1967,
    1968, 1969, 1970, 1971, 1972, 1973, 1974, 1975,
    1976, 1977, 1978, 1979, 1980, 1981, 1982, 1983,
    1984, 1985, 1986, 1987, 1988, 1989, 1990, 1991,
    1992, 1993, 1994, 1995, 1996, 1997, 1998, 1999,
    2000, 2001, 2002, 2003, 2004, 2005, 2006, 2007,
    2008, 2009, 2010, 2011, 2012, 2013, 2014, 2015,
    2016, 2017, 2018, 2019, 2020, 2021, 2022, 2023,
    2024, 2025, 2026, 2027, 2028, 2029, 2030, 2031,
    2032, 2033, 2034, 2035, 2036, 2037, 2038, 2039,
    2040, 2041, 2042, 2043, 2044, 2045, 2046, 2047,
    2048, 2049, 2050, 2051, 2052, 2053, 2054, 2055,
    2056, 2057, 2058, 2059, 2060, 2061, 2062, 2063,
    2064, 2065, 2066, 2067, 2068, 2069, 2070, 2071,
    2072, 2073, 2074, 2075, 2076, 2077, 2078, 2079,
    2080, 2081, 2082, 2083, 2084, 2085, 2086, 2087,
    2088, 2089, 2090, 2091, 2092, 2093, 2094, 2095,
    2096, 2097, 2098, 2099, 2100, 2101, 2102, 2103,
    2104, 2105, 2106, 2107, 2108, 2109, 2110, 2111,
    2112, 2113, 2114, 2115, 2116, 2117, 2118, 2119,
    2120, 2121, 2122, 2123, 2124, 2125, 2126, 2127,
    2128, 2129, 2130, 2131, 2132, 2133, 2134, 2135,
    2136, 2137, 2138, 2139, 2140, 2141, 2142, 2143,
    2144, 2145, 2146, 2147, 2148, 2149, 2150, 2151,
    2152, 2153, 2154, 2155, 2156, 2157, 2158, 2159,
    2160, 2161, 2162, 2163, 2164, 2165, 2166, 2167,
    2168, 2169, 2170, 2171, 2172, 2173, 2174, 2175,
    2176, 2177, 2178, 2179, 2180, 2181, 2182, 2183,
    2184, 2185, 2186, 2187, 2188, 2189, 2190, 2191,
    2192, 2193, 2194, 2195, 2196, 2197, 2198, 2199,
    2200, 2201, 2202, 2203, 2204, 2205, 2206, 2207,
    2208, 2209, 2210, 2211, 2212, 2213, 2214, 2215,
    2216, 2217, 2218, 2219, 2220, 2221, 2222, 2223,
    2224, 2225, 2226, 2227, 2228, 2229, 2230, 2231,
    2232, 2233, 2234, 2235, 2236, 2237, 2238, 2239,
    2240, 2241, 2242, 2243, 2244, 2245, 2246, 2247,
    2248, 2249, 2250, 2251, 2252, 2253, 2254, 2255,
    2256, 2257, 2258, 2259, 2260, 2261, 2262, 2263,
    2264, 2265, 2266, 2267, 2268, 2269, 2270, 2271,
    2272, 2273, 2274, 2275, 2276, 2277, 2278, 2279,
    2280, 2281, 2282, 2283, 2284, 2285, 2286, 2287,
    2288, 2289, 2290, 2291, 2292, 2293, 2294, 2295,
    2296, 2297, 2298, 2299, 2300, 2301, 2302, 2303,
    2304, 2305, 2306, 2307, 2308, 2309, 2310, 2311,
    2312, 2313, 2314, 2315, 2316, 2317, 2318, 2319,
    2320, 2321, 2322, 2323, 2324, 2325, 2326, 2327,
    2328, 2329, 2330, 2331, 2332, 2333, 2334, 2335,
    2336, 2337, 2338, 2339, 2340, 2341, 2342, 2343,
    2344, 2345, 2346, 2347, 2348, 2349, 2350, 2351,
    2352, 2353, 2354, 2355, 2356, 2357, 2358, 2359,
    2360, 2361, 2362, 2363, 2364, 2365, 2366, 2367,
    2368, 2369, 2370, 2371, 2372, 2373, 2374, 2375,
    2376, 2377, 2378, 2379, 2380, 2381, 2382, 2383,
    2384, 2385, 2386, 2387, 2388, 2389, 2390, 2391,
    2392, 2393, 2394, 2395, 2396, 2397, 2398, 2399,
    2400, 2401, 2402, 2403, 2404, 2405, 2406, 2407,
    2408, 2409, 2410, 2411, 2412, 2413, 2414, 2415,
    2416, 2417, 2418, 2419, 2420, 2421, 2422, 2423,
    2424, 2425, 2426, 2427, 2428, 2429, 2430, 2431,
    2432, 2433, 2434, 2435, 2436, 2437, 2438, 2439,
    2440, 2441, 2442, 2443, 2444, 2445, 2446, 2447,
    2448, 2449, 2450, 2451, 2452, 2453, 2454, 2455,
    2456, 2457, 2458, 2459, 2460, 2461, 2462, 2463,
    2464, 2465, 2466, 2467, 2468, 2469, 2470, 2471,
    2472, 2473, 2474, 2475, 2476, 2477, 2478, 2479,
    2480, 2481, 2482, 2483, 2484, 2485, 2486, 2487,
    2488, 2489, 2490, 2491, 2492, 2493, 2494, 2495,
    2496, 2497, 2498, 2499, 2500, 2501, 2502, 2503,
    2504, 2505, 2506, 2507, 2508, 2509, 2510, 2511,
    2512, 2513, 2514, 2515, 2516, 2517, 2518, 2519,
    2520, 2521, 2522, 2523, 2524, 2525, 2526, 2527,
    2528, 2529, 2530, 2531, 2532, 2533, 2534, 2535,
    2536, 2537, 2538, 2539, 2540, 2541, 2542, 2543,
    2544, 2545, 2546, 2547, 2548, 2549, 2550, 2551,
    2552, 2553, 2554, 2555, 2556, 2557, 2558, 2559,
    2560, 2561, 2562, 2563, 2564, 2565, 2566, 2567,
    2568, 2569, 2570, 2571, 2572, 2573, 2574, 2575,
    2576, 2577, 2578, 2579, 2580, 2581, 2582, 2583,
    2584, 2585, 2586, 2587, 2588, 2589, 2590, 2591,
    2592, 2593, 2594, 2595, 2596, 2597, 2598, 2599,
    2600, 2601, 2602, 2603, 2604, 2605, 2606, 2607,
    2608, 2609, 2610, 2611, 2612, 2613, 2614, 2615,
    2616, 2617, 2618, 2619, 2620, 2621, 2622, 2623,
    2624, 2625, 2626, 2627, 2628, 2629, 2630, 2631,
    2632, 2633, 2634, 2635, 2636, 2637, 2638, 2639,
    2640, 2641, 2642, 2643, 2644, 2645, 2646, 2647,
    2648, 2649, 2650, 2651, 2652, 2653, 2654, 2655,
    2656, 2657, 2658, 2659, 2660, 2661, 2662, 2663,
    2664, 2665, 2666, 2667, 2668, 2669, 2670, 2671,
    2672, 2673, 2674, 2675, 2676, 2677, 2678, 2679,
    2680, 2681, 2682, 2683, 2684, 2685, 2686, 2687,
    2688, 2689, 2690, 2691, 2692, 2693, 2694, 2695,
    2696, 2697, 2698, 2699, 2700, 2701, 2702, 2703,
    2704, 2705, 2706, 2707, 2708, 2709, 2710, 2711,
    2712, 2713, 2714, 2715, 2716, 2717, 2718, 2719,
    2720, 2721, 2722, 2723, 2724, 2725, 2726, 2727,
    2728, 2729, 2730, 2731, 2732, 2733, 2734, 2735,
    2736, 2737, 2738, 2739, 2740, 2741, 2742, 2743,
    2744, 2745, 2746, 2747, 2748, 2749, 2750, 2751,
    2752, 2753, 2754, 2755, 2756, 2757, 2758, 2759,
    2760, 2761, 2762, 2763, 2764, 2765, 2766, 2767,
    2768, 2769, 2770, 2771, 2772, 2773, 2774, 2775,
    2776, 2777, 2778, 2779, 2780, 2781, 2782, 2783,
    2784, 2785, 2786, 2787, 2788, 2789, 2790, 2791,
    2792, 2793, 2794, 2795, 2796, 2797, 2798, 2799,
    2800, 2801, 2802, 2803, 2804, 2805, 2806, 2807,
    2808, 2809, 2810, 2811, 2812, 2813, 2814, 2815,
    2816, 2817, 2818, 2819, 2820, 2821, 2822, 2823,
    2824, 2825, 2826, 2827, 2828, 2829, 2830, 2831,
    2832, 2833, 2834, 2835, 2836, 2837, 2838, 2839,
    2840, 2841, 2842, 2843, 2844, 2845, 2846, 2847,
    2848, 2849, 2850, 2851, 2852, 2853, 2854, 2855,
    2856, 2857, 2858, 2859, 2860, 2861, 2862, 2863,
    2864, 2865, 2866, 2867, 2868, 2869, 2870, 2871,
    2872, 2873, 2874, 2875, 2876, 2877, 2878, 2879,
    2880, 2881, 2882, 2883, 2884, 2885, 2886, 2887,
    2888, 2889, 2890, 2891, 2892, 2893, 2894, 2895,
    2896, 2897, 2898, 2899, 2900, 2901, 2902, 2903,
    2904, 2905, 2906, 2907, 2908, 2909, 2910, 2911,
    2912, 2913, 2914, 2915, 2916, 2917, 2918, 2919,
    2920, 2921, 2922, 2923, 2924, 2925, 2926, 2927,
    2928, 2929, 2930, 2931, 2932, 2933, 2934, 2935,
    2936, 2937, 2938, 2939, 2940, 2941, 2942, 2943,
    2944, 2945, 2946, 2947, 2948, 2949, 2950, 2951,
    2952, 2954, 2955, 2956, 2957, 2958, 2959, 2960,
    2961, 2962, 2963, 2964, 2965, 2966, 2967, 2968,
    2969, 2970, 2971, 2972, 2973, 2974, 2975, 2976,
    2977, 2978, 2979, 2980, 2981, 2982, 2983, 2984,
    2985, 2986, 2987, 2988, 2989, 2990, 2991, 2992,
    2993, 2994, 2995, 2996, 2997, 2998, 2999, 3000,
    3001, 3002, 3003, 3004, 3005, 3006, 3007, 3008,
    3009, 3010, 3011, 3012, 3013, 3014, 3015, 3016,
    3017, 3018, 3019, 3020, 3021, 3022, 3023, 3024,
    3025, 3026, 3027, 3028, 3029, 3030, 3031, 3032,
    3033, 3034, 3035, 3036, 3037, 3038, 3039, 3040,
    3041, 3042, 3043, 3044, 3045, 3046, 3047, 3048,
    3049, 3050, 3051, 3052, 3053, 3054, 3055, 3056,
    3057, 3058, 3059, 3060, 3061, 3062, 3063, 3064,
    3065, 3066, 3067, 3068, 3069, 3070, 3071, 3072,
    3073, 3074, 3075, 3076, 3077, 3078, 3079, 3080,
    3081, 3082, 3083, 3084, 3085, 3086, 3087, 3088,
    3089, 3090, 3091, 3092, 3093, 3094, 3095, 3096,
    3097, 3098, 3099, 3100, 3101, 3102, 3103, 3104,
    3105, 3106, 3107, 3108, 3109, 3110, 3111, 3112,
    3113, 3114, 3115, 3116, 3117, 3118, 3119, 3120,
    3121, 3122, 3123, 3124, 3125, 3126, 3127, 3128,
    3129, 3130, 3131, 3132, 3133, 3134, 3135, 3136,
    3137, 3138, 3139, 3140, 3141, 3142, 3143, 3144,
    3145, 3146, 3147, 3148, 3149, 3150, 3151, 3152,
    3153, 3154, 3155, 3156, 3157, 3158, 3159, 3160,
    3161, 3162, 3163, 3164, 3165, 3166, 3167, 3168,
    3169, 3170, 3171, 3172, 3173, 3174, 3175, 3176,
    3177, 3178, 3179, 3180, 3181, 3182, 3183, 3184,
    3185, 3186, 3187, 3188, 3189, 3190, 3191, 3192,
    3193, 3194, 3195, 3196, 3197, 3198, 3199, 3200,
    3201, 3202, 3203, 3204, 3205, 3206, 3207, 3208,
    3209, 3210, 3211, 3212, 3213, 3214, 3215, 3216,
    3217, 3218, 3219, 3220, 3221, 3222, 3223, 3224,
    3225, 3226, 3227, 3228, 3229, 3230, 3231, 3232,
    3233, 3234, 3235, 3236, 3237, 3238, 3239, 3240,
    3241, 3242, 3243, 3244, 3245, 3246, 3247, 3248,
    3249, 3250, 3251, 3252, 3253, 3254, 3255, 3256,
    3257, 3258, 3259, 3260, 3261, 3262, 3263, 3264,
    3265, 3266, 3267, 3268, 3269, 3270, 3271, 3272,
    3273, 3274, 3275, 3276, 3277, 3278, 3279, 3280,
    3281, 3282, 3283, 3284, 3285, 3286, 3287, 3288,
    3289, 3290, 3291, 3292, 3293, 3294, 3295, 3296,
    3297, 3298, 3299, 3300, 3301, 3302, 3303, 3304,
    3305, 3306, 3307, 3308, 3309, 3310, 3311, 3312,
    3313, 3314, 3315, 3316, 3317, 3318, 3319, 3320,
    3321, 3322, 3323, 3324, 3325, 3326, 3327, 3328,
    3329, 3330, 3331, 3332, 3333, 3334, 3335, 3336,
    3337, 3338, 3339, 3340, 3341, 3342, 3343, 3344,
    3345, 3346, 3347, 3348, 3349, 3350, 3351, 3352,
    3353, 3354, 3355, 3356, 3357, 3358, 3359, 3360,
    3361, 3362, 3363, 3364, 3365, 3366, 3367, 3368,
    3369, 3370, 3371, 3372, 3373, 3374, 3375, 3376,
    3377, 3378, 3379, 3380, 3381, 3382, 3383, 3384,
    3385, 3386, 3387, 3388, 3389, 3390, 3391, 3392,
    3393, 3394, 3395, 3396, 3397, 3398, 3399, 3400,
    3401, 3402, 3403, 3404, 3405, 3406, 3407, 3408,
    3409, 3410, 3411, 3412, 3413, 3414, 3415, 3416,
    3417, 3418, 3419, 3420, 3421, 3422, 3423, 3424,
    3425, 3426, 3427, 3428, 3429, 3430, 3431, 3432,
    3433, 3434, 3435, 3436, 3437, 3438, 3439, 3440,
    3441, 3442, 3443, 3444, 3445, 3446, 3447, 3448,
    3449, 3450, 3451, 3452, 3453, 3454, 3455, 3456,
    3457, 3458, 3459, 3460, 3461, 3462, 3463, 3464,
    3465, 3466, 3467, 3468, 3469, 3470, 3471, 3472,
    3473, 3474, 3475, 3476, 3477, 3478, 3479, 3480,
    3481, 3482, 3483, 3484, 3485, 3486, 3487, 3488,
    3489, 3490, 3491, 3492, 3493, 3494, 3495, 3496,
    3497, 3498, 3499, 3500, 3501, 3502, 3503, 3504,
    3505, 3506, 3507, 3508, 3509, 3510, 3511, 3512,
    3513, 3514, 3515, 3516, 3517, 3518, 3519, 3520,
    3521, 3522, 3523, 3524, 3525, 3526, 3527, 3528,
    3529, 3530, 3531, 3532, 3533, 3534, 3535, 3536,
    3537, 3538, 3539, 3540, 3541, 3542, 3543, 3544,
    3545, 3546, 3547, 3548, 3549, 3550, 3551, 3552,
    3553, 3554, 3555, 3556, 3557, 3558, 3559, 3560,
    3561, 3562, 3563, 3564, 3565, 3566, 3567, 3568,
    3569, 3570, 3571, 3572, 3573, 3574, 3575, 3576,
    3577, 3578, 3579, 3580, 3581, 3582, 3583, 3584,
    3585, 3586, 3587, 3588, 3589, 3590, 3591, 3592,
    3593, 3594, 3595, 3596, 3597, 3598, 3599, 3600,
    3601, 3602, 3603, 3604, 3605, 3606, 3607, 3608,
    3609, 3610, 3611, 3612, 3613, 3614, 3615, 3616,
    3617, 3618, 3619, 3620, 3621, 3622, 3623, 3624,
    3625, 3626, 3627, 3628, 3629, 3630, 3631, 3632,
    3633, 3634, 3635, 3636, 3637, 3638, 3639, 3640,
    3641, 3642, 3643, 3644, 3645, 3646, 3647, 3648,
    3649, 3650, 3651, 3652, 3653, 3654, 3655, 3656,
    3657, 3658, 3659, 3660, 3661, 3662, 3663, 3664,
    3665, 3666, 3667, 3668, 3669, 3670, 3671, 3672,
    3673, 3674, 3675, 3676, 3677, 3678, 3679, 3680,
    3681, 3682, 3683, 3684, 3685, 3686, 3687, 3688,
    3689, 3690, 3691, 3692, 3693, 3694, 3695, 3696,
    3697, 3698, 3699, 3700, 3701, 3702, 3703, 3704,
    3705, 3706, 3707, 3708, 3709, 3710, 3711, 3712,
    3713, 3714, 3715, 3716, 3717, 3718, 3719, 3720,
    3722, 3723, 3724, 3725, 3726, 3727, 3728, 3729,
    3730, 3731, 3732, 3733, 3734, 3735, 3736, 3737,
    3738, 3739, 3740, 3741, 3742, 3743, 3744, 3745,
    3746, 3747, 3748, 3749, 3750, 3751, 3752, 3753,
    3754, 3755, 3756, 3757, 3758, 3759, 3760, 3761,
    3762, 3763, 3764, 3765, 3766, 3767, 3768, 3769,
    3770, 3771, 3772, 3773, 3774, 3775, 3776, 3777,
    3778, 3779, 3780, 3781, 3782, 3783, 3784, 3785,
    3786, 3787, 3788, 3789, 3790, 3791, 3792, 3793,
    3794, 3795, 3796, 3797, 3798, 3799, 3800, 3801,
    3802, 3803, 3804, 3805, 3806, 3807, 3808, 3809,
    3810, 3811, 3812, 3813, 3814, 3815, 3816, 3817,
    3818, 3819, 3820, 3821, 3822, 3823, 3824, 3825,
    3826, 3827, 3828, 3829, 3830, 3831, 3832, 3833,
    3834, 3835, 3836, 3837, 3838, 3839, 3840, 3841,
    3842, 3843, 3844, 3845, 3846, 3847, 3848, 3849,
    3850, 3851, 3852, 3853, 3854, 3855, 3856, 3857,
    3858, 3859, 3860, 3861, 3862, 3863, 3864, 3865,
    3866, 3867, 3868, 3869, 3870, 3871, 3872, 3873,
    3874, 3875, 3876, 3877, 3878, 3879, 3880, 3881,
    3882, 3883, 3884, 3885, 3886, 3887, 3888, 3889,
    3890, 3891, 3892, 3893, 3894, 3895, 3896, 3897,
    3898, 3899, 3900, 3901, 3902, 3903, 3904, 3905,
    3906, 3907, 3908, 3909, 3910, 3911, 3912, 3913,
    3914, 3915, 3916, 3917, 3918, 3919, 3920, 3921,
    3922, 3923, 3924, 3925, 3926, 3927, 3928, 3929,
    3930, 3931, 3932, 3933, 3934, 3935, 3936, 3937,
    3938, 3939, 3940, 3941, 3942, 3943, 3944, 3945,
    3946, 3947, 3948, 3949, 3950, 3951, 3952, 3953,
    3954, 3955, 3956, 3957, 3958, 3959, 3960, 3961,
    3962, 3963, 3964, 3965, 3966, 3967, 3968, 3969,
    3970, 3971, 3972, 3973, 3974, 3975, 3976, 3977,
    3978, 3979, 3980, 3981, 3982, 3983, 3984, 3985,
    3986, 3987, 3988, 3989, 3990, 3991, 3992, 3993,
    3994, 3995, 3996, 3997, 3998, 3999, 4000, 4001,
    4002, 4003, 4004, 4005, 4006, 4007, 4008, 4009,
    4010, 4011, 4012, 4013, 4014, 4015, 4016, 4017,
    4018, 4019, 4020, 4021, 4022, 4023, 4024, 4025,
    4026, 4027, 4028, 4029, 4030, 4031, 4032, 4033,
    4034, 4035, 4036, 4037, 4038, 4039, 4040, 4041,
    4042, 4043, 4044, 4045, 4046, 4047, 4048, 4049,
    4050, 4051, 4052, 4053, 4054, 4055, 4056, 4057,
    4058, 4059, 4060, 4061, 4062, 4063, 4064, 4065,
    4066, 4067, 4068, 4069, 4070, 4071, 4072, 4073,
    4074, 4075, 4076, 4077, 4078, 4079, 4080, 4081,
    4082, 4083, 4084, 4085, 4086, 4087, 4088, 4089,
    4090, 4091, 4092, 4093, 4094, 4095, 4096, 4097,
    4098, 4099, 4100, 4101, 4102, 4103, 4104, 4105,
    4106, 4107, 4108, 4109, 4110, 4111, 4112, 4113,
    4114, 4115, 4116, 4117, 4118, 4119, 4120, 4121,
    4122, 4123, 4124, 4125, 4126, 4127, 4128, 4129,
    4130, 4131, 4132, 4133, 4134, 4135, 4136, 4137,
    4138, 4139, 4140, 4141, 4142, 4143, 4144, 4145,
    4146, 4147, 4148, 4149, 4150, 4151, 4152, 4153,
    4154, 4155, 4156, 4157, 4158, 4159, 4160, 4161,
    4162, 4163, 4164, 4165, 4166, 4167, 4168, 4169,
    4170, 4171, 4172, 4173, 4174, 4175, 4176, 4177,
    4178, 4179, 4180, 4181, 4182, 4183, 4184, 4185,
    4186, 4187, 4188, 4189, 4190, 4191, 4192, 4193,
    4194, 4195, 4196, 4197, 4198, 4199, 4200, 4201,
    4202, 4203, 4204, 4205, 4206, 4207, 4208, 4209,
    4210, 4211, 4212, 4213, 4214, 4215, 4216, 4217,
    4218, 4219, 4220, 4221, 4222, 4223, 4224, 4225,
    4226, 4227, 4228, 4229, 4230, 4231, 4232, 4233,
    4234, 4235, 4236, 4237, 4238, 4239, 4240, 4241,
    4242, 4243, 4244, 4245, 4246, 4247, 4248, 4249,
    4250, 4251, 4252, 4253, 4254, 4255, 4256, 4257,
    4258, 4259, 4261, 4262, 4263, 4264, 4265, 4266,
    4267, 4268, 4269, 4270, 4271, 4272, 4273, 4274,
    4275, 4276, 4277, 4278, 4279, 4280, 4281, 4282,
    4283, 4284, 4285, 4286, 4287, 4288, 4289, 4290,
    4291, 4292, 4293, 4294, 4295, 4296, 4297, 4298,
    4299, 4300, 4301, 4302, 4303, 4304, 4305, 4306,
    4307, 4308, 4309, 4310, 4311, 4312, 4313, 4314,
    4315, 4316, 4317, 4318, 4319, 4320, 4321, 4322,
    4323, 4324, 4325, 4326, 4327, 4328, 4329, 4330,
    4331, 4332, 4333, 4334, 4335, 4336, 4337, 4338,
    4339, 4340, 4341, 4342, 4343, 4344, 4345, 4346,
    4347, 4348, 4349, 4350, 4351, 4352, 4353, 4354,
    4355, 4356, 4357, 4358, 4359, 4360, 4361, 4362,
    4363, 4364, 4365, 4366, 4367, 4368, 4369, 4370,
    4371, 4372, 4373, 4374, 4375, 4376, 4377, 4378,
    4379, 4380, 4381, 4382, 4383, 4384, 4385, 4386,
    4387, 4388, 4389, 4390, 4391, 4392, 4393, 4394,
    4395, 4396, 4397, 4398, 4399, 4400, 4401, 4402,
    4403, 4404, 4405, 4406, 4407, 4408, 4409, 4410,
    4411, 4412, 4413, 4414, 4415, 4416, 4417, 4418,
    4419, 4420, 4421, 4422, 4423, 4424, 4425, 4426,
    4427, 4428, 4429, 4430, 4431, 4432, 4433, 4434,
    4435, 4436, 4437, 4438, 4439, 4440, 4441, 4442,
    4443, 4444, 4445, 4446, 4447, 4448, 4449, 4450,
    4451, 4452, 4453, 4454, 4455, 4456, 4457, 4458,
    4459, 4460, 4461, 4462, 4463, 4464, 4465, 4466,
    4467, 4468, 4469, 4470, 4471, 4472, 4473, 4474,
    4475, 4476, 4477, 4478, 4479, 4480, 4481, 4482,
    4483, 4484, 4485, 4486, 4487, 4488, 4489, 4490,
    4491, 4492, 4493, 4494, 4495, 4496, 4497, 4498,
    4499, 4500, 4501, 4502, 4503, 4504, 4505, 4506,
    4507, 4508, 4509, 4510, 4511, 4512, 4513, 4514,
    4515, 4516, 4517, 4518, 4519, 4520, 4521, 4522,
    4523, 4524, 4525, 4526, 4527, 4528, 4529, 4530,
    4531, 4532, 4533, 4534, 4535, 4536, 4537, 4538,
    4539, 4540, 4541, 4542, 4543, 4544, 4545, 4546,
    4547, 4548, 4549, 4550, 4551, 4552, 4553, 4554,
    4555, 4556, 4557, 4558, 4559, 4560, 4561, 4562,
    4563, 4564, 4565, 4566, 4567, 4568, 4569, 4570,
    4571, 4572, 4573, 4574, 4575, 4576, 4577, 4578,
    4579, 4580, 4581, 4582, 4583, 4584, 4585, 4586,
    4587, 4588, 4589, 4590, 4591, 4592, 4593, 4594,
    4595, 4596, 4597, 4598, 4599, 4600, 4601, 4602,
    4603, 4604, 4605, 4606, 4607, 4608, 4609, 4610,
    4611, 4612, 4613, 4614, 4615, 4616, 4617, 4618,
    4619, 4620, 4621, 4622, 4623, 4624, 4625, 4626,
    4627, 4628, 4629, 4630, 4631, 4632, 4633, 4634,
    4635, 4636, 4637, 4638, 4639, 4640, 4641, 4642,
    4643, 4644, 4645, 4646, 4647, 4648, 4649, 4650,
    4651, 4652, 4653, 4654, 4655, 4656, 4657, 4658,
    4659, 4660, 4661, 4662, 4663, 4664, 4665, 4666,
    4667, 4668, 4669, 4670, 4671, 4672, 4673, 4674,
    4675, 4676, 4677, 4678, 4679, 4680, 4681, 4682,
    4683, 4684, 4685, 4686, 4687, 4688, 4690, 4691,
    4692, 4693, 4694, 4695, 4696, 4697, 4698, 4699,
    4700, 4701, 4702, 4703, 4704, 4705, 4706, 4707,
    4708, 4709, 4710, 4711, 4712, 4713, 4714, 4715,
    4716, 4717, 4718, 4719, 4720, 4721, 4722, 4723,
    4724, 4725, 4726, 4727, 4728, 4729, 4730, 4731,
    4732, 4733, 4734, 4735, 4736, 4737, 4738, 4739,
    4740, 4741, 4742, 4743, 4744, 4745, 4746, 4747,
    4748, 4749, 4750, 4751, 4752, 4753, 4754, 4755,
    4756, 4757, 4758, 4759, 4760, 4761, 4762, 4763,
    4764, 4765, 4766, 4767, 4768, 4769, 4770, 4771,
    4772, 4773, 4774, 4775, 4776, 4777, 4778, 4779,
    4780, 4781, 4782, 4783, 4784, 4785, 4786, 4787,
    4788, 4789, 4790, 4791, 4792, 4793, 4794, 4795,
    4796, 4797, 4798, 4799, 4800, 4801, 4802, 4803,
    4804, 4805, 4806, 4807, 4808, 4809, 4810, 4811,
    4812, 4813, 4814, 4815, 4816, 4817, 4818, 4819,
    4820, 4821, 4822, 4823, 4824, 4825, 4826, 4827,
    4828, 4829, 4830, 4831, 4832, 4833, 4834, 4835,
    4836, 4837, 4838, 4839, 4840, 4841, 4842, 4843,
    4844, 4845, 4846, 4847, 4848, 4849, 4850, 4851,
    4852, 4853, 4854, 4855, 4856, 4857, 4858, 4859,
    4860, 4861, 4862, 4863, 4864, 4865, 4866, 4867,
    4868, 4869, 4870, 4871, 4872, 4873, 4874, 4875,
    4876, 4877, 4878, 4879, 4880, 4881, 4882, 4883,
    4884, 4885, 4886, 4887, 4888, 4889, 4890, 4891,
    4892, 4893, 4894, 4895, 4896, 4897, 4898, 4899,
    4900, 4901, 4902, 4903, 4904, 4905, 4906, 4907,
    4908, 4909, 4910, 4911, 4912, 4913, 4914, 4915,
    4916, 4917, 4918, 4919, 4920, 4921, 4922, 4923,
    4924, 4925, 4926, 4927, 4928, 4929, 4930, 4931,
    4932, 4933, 4934, 4935, 4936, 4937, 4938, 4939,
    4940, 4941, 4942, 4943, 4944, 4945, 4946, 4947,
    4948, 4949, 4950, 4951, 4952, 4953, 4954, 4955,
    4956, 4957, 4958, 4959, 4960, 4961, 4962, 4963,
    4964, 4965, 4966, 4967, 4968, 4969, 4970, 4971,
    4972, 4973, 4974, 4975, 4976, 4977, 4978, 4979,
    4980, 4981, 4982, 4983, 4984, 4985, 4986, 4987,
    4988, 4989, 4990, 4991, 4992, 4993, 4994, 4995,
    4996, 4997, 4998, 4999, 5000, 5001, 5002, 5003,
    5004, 5005, 5006, 5007, 5008, 5009, 5010, 5011,
    5012, 5013, 5014, 5015, 5016, 5017, 5018, 5019,
    5020, 5021, 5022, 5023, 5024, 5025, 5026, 5027,
    5028, 5029, 5030, 5031, 5032, 5033, 5034, 5035,
    5036, 5037, 5038, 5039, 5040, 5041, 5042, 5043,
    5044, 5045, 5046, 5047, 5048, 5049, 5050, 5052,
    5053, 5054, 5055, 5056, 5057, 5058, 5059, 5060,
    5061, 5062, 5063, 5064, 5065, 5066, 5067, 5068,
    5069, 5070, 5071, 5072, 5073, 5074, 5075, 5076,
    5077, 5078, 5079, 5080, 5081, 5082, 5083, 5084,
    5085, 5086, 5087, 5088, 5089, 5090, 5091, 5092,
    5093, 5094, 5095, 5096, 5097, 5098, 5099, 5100,
    5101, 5102, 5103, 5104, 5105, 5106, 5107, 5108,
    5109, 5110, 5111, 5112, 5113, 5114, 5115, 5116,
    5117, 5118, 5119, 5120, 5121, 5122, 5123, 5124,
    5125, 5126, 5127, 5128, 5129, 5130, 5131, 5132,
    5133, 5134, 5135, 5136, 5137, 5138, 5139, 5140,
    5141, 5142, 5143, 5144, 5145, 5146, 5147, 5148,
    5149, 5150, 5151, 5152, 5153, 5154, 5155, 5156,
    5157, 5158, 5159, 5160, 5161, 5162, 5163, 5164,
    5165, 5166, 5167, 5168, 5169, 5170, 5171, 5172,
    5173, 5174, 5175, 5176, 5177, 5178, 5179, 5180,
    5181, 5182, 5183, 5184, 5185, 5186, 5187, 5188,
    5189, 5190, 5191, 5192, 5193, 5194, 5195, 5196,
    5197, 5198, 5199, 5200, 5201, 5202, 5203, 5204,
    5205, 5206, 5207, 5208, 5209, 5210, 5211, 5212,
    5213, 5214, 5215, 5216, 5217, 5218, 5219, 5220,
    5221, 5222, 5223, 5224, 5225, 5226, 5227, 5228,
    5229, 5230, 5231, 5232, 5233, 5234, 5235, 5236,
    5237, 5238, 5239, 5240, 5241, 5242, 5243, 5244,
    5245, 5246, 5247, 5248, 5249, 5250, 5251, 5252,
    5253, 5254, 5255, 5256, 5257, 5258, 5259, 5260,
    5261, 5262, 5263, 5264, 5265, 5266, 5267, 5268,
    5269, 5270, 5271, 5272, 5273, 5274, 5275, 5276,
    5277, 5278, 5279, 5280, 5281, 5282, 5283, 5284,
    5285, 5286, 5287, 5288, 5289, 5290, 5291, 5292,
    5293, 5294, 5295, 5296, 5297, 5298, 5299, 5300,
    5301, 5302, 5303, 5304, 5305, 5306, 5307, 5308,
    5309, 5310, 5311, 5312, 5313, 5314, 5315, 5316,
    5317, 5318, 5319, 5320, 5321, 5322, 5323, 5324,
    5325, 5326, 5327, 5328, 5329, 5330, 5331, 5332,
    5333, 5334, 5335, 5336, 5337, 5338, 5339, 5340,
    5341, 5342, 5343, 5344, 5345, 5346, 5347, 5348,
    5349, 5350, 5351, 5352, 5353, 5354, 5355, 5356,
    5357, 5358, 5359, 5360, 5361, 5362, 5363, 5364,
    5365, 5366, 5368, 5369, 5370, 5371, 5372, 5373,
    5374, 5375, 5376, 5377, 5378, 5379, 5380, 5381,
    5382, 5383, 5384, 5385, 5386, 5387, 5388, 5389,
    5390, 5391, 5392, 5393, 5394, 5395, 5396, 5397,
    5398, 5399, 5400, 5401, 5402, 5403, 5404, 5405,
    5406, 5407, 5408, 5409, 5410, 5411, 5412, 5413,
    5414, 5415, 5416, 5417, 5418, 5419, 5420, 5421,
    5422, 5423, 5424, 5425, 5426, 5427, 5428, 5429,
    5430, 5431, 5432, 5433, 5434, 5435, 5436, 5437,
    5438, 5439, 5440, 5441, 5442, 5443, 5444, 5445,
    5446, 5447, 5448, 5449, 5450, 5451, 5452, 5453,
    5454, 5455, 5456, 5457, 5458, 5459, 5460, 5461,
    5462, 5463, 5464, 5465, 5466, 5467, 5468, 5469,
    5470, 5471, 5472, 5473, 5474, 5475, 5476, 5477,
    5478, 5479, 5480, 5481, 5482, 5483, 5484, 5485,
    5486, 5487, 5488, 5489, 5490, 5491, 5492, 5493,
    5494, 5495, 5496, 5497, 5498, 5499, 5500, 5501,
    5502, 5503, 5504, 5505, 5506, 5507, 5508, 5509,
    5510, 5511, 5512, 5513, 5514, 5515, 5516, 5517,
    5518, 5519, 5520, 5521, 5522, 5523, 5524, 5525,
    5526, 5527, 5528, 5529, 5530, 5531, 5532, 5533,
    5534, 5535, 5536, 5537, 5538, 5539, 5540, 5541,
    5542, 5543, 5544, 5545, 5546, 5547, 5548, 5549,
    5550, 5551, 5552, 5553, 5554, 5555, 5556, 5557,
    5558, 5559, 5560, 5561, 5562, 5563, 5564, 5565,
    5566, 5567, 5568, 5569, 5570, 5571, 5572, 5573,
    5574, 5575, 5576, 5577, 5578, 5579, 5580, 5581,
    5582, 5583, 5584, 5585, 5586, 5587, 5588, 5589,
    5590, 5591, 5592, 5593, 5594, 5595, 5596, 5597,
    5598, 5599, 5600, 5601, 5602, 5603, 5604, 5605,
    5606, 5607, 5608, 5609, 5610, 5611, 5612, 5613,
    5614, 5615, 5616, 5617, 5618, 5619, 5620, 5621,
    5622, 5623, 5624, 5625, 5626, 5627, 5628, 5629,
    5630, 5631, 5632, 5633, 5634, 5635, 5636, 5637,
    5638, 5639, 5640, 5641, 5642, 5643, 5644, 5645,
    5646, 5647, 5648, 5649, 5651, 5652, 5653, 5654,
    5655, 5656, 5657, 5658, 5659, 5660, 5661, 5662,
    5663, 5664, 5665, 5666, 5667, 5668, 5669, 5670,
    5671, 5672, 5673, 5674, 5675, 5676, 5677, 5678,
    5679, 5680, 5681, 5682, 5683, 5684, 5685, 5686,
    5687, 5688, 5689, 5690, 5691, 5692, 5693, 5694,
    5695, 5696, 5697, 5698, 5699, 5700, 5701, 5702,
    5703, 5704, 5705, 5706, 5707, 5708, 5709, 5710,
    5711, 5712, 5713, 5714, 5715, 5716, 5717, 5718,
    5719, 5720, 5721, 5722, 5723, 5724, 5725, 5726,
    5727, 5728, 5729, 5730, 5731, 5732, 5733, 5734,
    5735, 5736, 5737, 5738, 5739, 5740, 5741, 5742,
    5743, 5744, 5745, 5746, 5747, 5748, 5749, 5750,
    5751, 5752, 5753, 5754, 5755, 5756, 5757, 5758,
    5759, 5760, 5761, 5762, 5763, 5764, 5765, 5766,
    5767, 5768, 5769, 5770, 5771, 5772, 5773, 5774,
    5775, 5776, 5777, 5778, 5779, 5780, 5781, 5782,
    5783, 5784, 5785, 5786, 5787, 5788, 5789, 5790,
    5791, 5792, 5793, 5794, 5795, 5796, 5797, 5798,
    5799, 5800, 5801, 5802, 5803, 5804, 5805, 5806,
    5807, 5808, 5809, 5810, 5811, 5812, 5813, 5814,
    5815, 5816, 5817, 5818, 5819, 5820, 5821, 5822,
    5823, 5824, 5825, 5826, 5827, 5828, 5829, 5830,
    5831, 5832, 5833, 5834, 5835, 5836, 5837, 5838,
    5839, 5840, 5841, 5842, 5843, 5844, 5845, 5846,
    5847, 5848, 5849, 5850, 5851, 5852, 5853, 5854,
    5855, 5856, 5857, 5858, 5859, 5860, 5861, 5862,
    5863, 5864, 5865, 5866, 5867, 5868, 5869, 5870,
    5871, 5872, 5873, 5874, 5875, 5876, 5877, 5878,
    5879, 5880, 5881, 5882, 5883, 5884, 5885, 5886,
    5887, 5888, 5889, 5890, 5891, 5892, 5893, 5894,
    5895, 5896, 5897, 5898, 5899, 5900, 5901, 5902,
    5903, 5904, 5905, 5906, 5907, 5909, 5910, 5911,
    5912, 5913, 5914, 5915, 5916, 5917, 5918, 5919,
    5920, 5921, 5922, 5923, 5924, 5925, 5926, 5927,
    5928, 5929, 5930, 5931, 5932, 5933, 5934, 5935,
    5936, 5937, 5938, 5939, 5940, 5941, 5942, 5943,
    5944, 5945, 5946, 5947, 5948, 5949, 5950, 5951,
    5952, 5953, 5954, 5955, 5956, 5957, 5958, 5959,
    5960, 5961, 5962, 5963, 5964, 5965, 5966, 5967,
    5968, 5969, 5970, 5971, 5972, 5973, 5974, 5975,
    5976, 5977, 5978, 5979, 5980, 5981, 5982, 5983,
    5984, 5985, 5986, 5987, 5988, 5989, 5990, 5991,
    5992, 5993, 5994, 5995, 5996, 5997, 5998, 5999,
    6000, 6001, 6002, 6003, 6004, 6005, 6006, 6007,
    6008, 6009, 6010, 6011, 6012, 6013, 6014, 6015,
    6016, 6017, 6018, 6019, 6020, 6021, 6022, 6023,
    6024, 6025, 6026, 6027, 6028, 6029, 6030, 6031,
    6032, 6033, 6034, 6035, 6036, 6037, 6038, 6039,
    6040, 6041, 6042, 6043, 6044, 6045, 6046, 6047,
    6048, 6049, 6050, 6051, 6052, 6053, 6054, 6055,
    6056, 6057, 6058, 6059, 6060, 6061, 6062, 6063,
    6064, 6065, 6066, 6067, 6068, 6069, 6070, 6071,
    6072, 6073, 6074, 6075, 6076, 6077, 6078, 6079,
    6080, 6081, 6082, 6083, 6084, 6085, 6086, 6087,
    6088, 6089, 6090, 6091, 6092, 6093, 6094, 6095,
    6096, 6097, 6098, 6099, 6100, 6101, 6102, 6103,
    6104, 6105, 6106, 6107, 6108, 6109, 6110, 6111,
    6112, 6113, 6114, 6115, 6116, 6117, 6118, 6119,
    6120, 6121, 6122, 6123, 6124, 6125, 6126, 6127,
    6128, 6129, 6130, 6131, 6132, 6133, 6134, 6135,
    6136, 6137, 6138, 6139, 6140, 6141, 6142, 6143,
    6145, 6146, 6147, 6148, 6149, 6150, 6151, 6152,
    6153, 6154, 6155, 6156, 6157, 6158, 6159, 6160,
    6161, 6162, 6163, 6164, 6165, 6166, 6167, 6168,
    6169, 6170, 6171, 6172, 6173, 6174, 6175, 6176,
    6177, 6178, 6179, 6180, 6181, 6182, 6183, 6184,
    6185, 6186, 6187, 6188, 6189, 6190, 6191, 6192,
    6193, 6194, 6195, 6196, 6197, 6198, 6199, 6200,
    6201, 6202, 6203, 6204, 6205, 6206, 6207, 6208,
    6209, 6210, 6211, 6212, 6213, 6214, 6215, 6216,
    6217, 6218, 6219, 6220, 6221, 6222, 6223, 6224,
    6225, 6226, 6227, 6228, 6229, 6230, 6231, 6232,
    6233, 6234, 6235, 6236, 6237, 6238, 6239, 6240,
    6241, 6242, 6243, 6244, 6245, 6246, 6247, 6248,
    6249, 6250, 6251, 6252, 6253, 6254, 6255, 6256,
    6257, 6258, 6259, 6260, 6261, 6262, 6263, 6264,
    6265, 6266, 6267, 6268, 6269, 6270, 6271, 6272,
    6273, 6274, 6275, 6276, 6277, 6278, 6279, 6280,
    6281, 6282, 6283, 6284, 6285, 6286, 6287, 6288,
    6289, 6290, 6291, 6292, 6293, 6294, 6295, 6296,
    6297, 6298, 6299, 6300, 6301, 6302, 6303, 6304,
    6305, 6306, 6307, 6308, 6309, 6310, 6311, 6312,
    6313, 6314, 6315, 6316, 6317, 6318, 6319, 6320,
    6321, 6322, 6323, 6324, 6325, 6326, 6327, 6328,
    6329, 6330, 6331, 6332, 6333, 6334, 6335, 6336,
    6337, 6338, 6339, 6340, 6341, 6342, 6343, 6344,
    6345, 6346, 6347, 6348, 6349, 6350, 6351, 6352,
    6353, 6354, 6355, 6356, 6357, 6358, 6359, 6360,
    6361, 6362, 6363, 6365, 6366, 6367, 6368, 6369,
    6370, 6371, 6372, 6373, 6374, 6375, 6376, 6377,
    6378, 6379, 6380, 6381, 6382, 6383, 6384, 6385,
    6386, 6387, 6388, 6389, 6390, 6391, 6392, 6393,
    6394, 6395, 6396, 6397, 6398, 6399, 6400, 6401,
    6402, 6403, 6404, 6405, 6406, 6407, 6408, 6409,
    6410, 6411, 6412, 6413, 6414, 6415, 6416, 6417,
    6418, 6419, 6420, 6421, 6422, 6423, 6424, 6425,
    6426, 6427, 6428, 6429, 6430, 6431, 6432, 6433,
    6434, 6435, 6436, 6437, 6438, 6439, 6440, 6441,
    6442, 6443, 6444, 6445, 6446, 6447, 6448, 6449,
    6450, 6451, 6452, 6453, 6454, 6455, 6456, 6457,
    6458, 6459, 6460, 6461, 6462, 6463, 6464, 6465,
    6466, 6467, 6468, 6469, 6470, 6471, 6472, 6473,
    6474, 6475, 6476, 6477, 6478, 6479, 6480, 6481,
    6482, 6483, 6484, 6485, 6486, 6487, 6488, 6489,
    6490, 6491, 6492, 6493, 6494, 6495, 6496, 6497,
    6498, 6499, 6500, 6501, 6502, 6503, 6504, 6505,
    6506, 6507, 6508, 6509, 6510, 6511, 6512, 6513,
    6514, 6515, 6516, 6517, 6518, 6519, 6520, 6521,
    6522, 6523, 6524, 6525, 6526, 6527, 6528, 6529,
    6530, 6531, 6532, 6533, 6534, 6535, 6536, 6537,
    6538, 6539, 6540, 6541, 6542, 6543, 6544, 6545,
    6546, 6547, 6548, 6549, 6550, 6551, 6552, 6553,
    6554, 6555, 6556, 6557, 6558, 6559, 6560, 6561,
    6562, 6563, 6564, 6565, 6566, 6567, 6568, 6569,
    6571, 6572, 6573, 6574, 6575, 6576, 6577, 6578,
    6579, 6580, 6581, 6582, 6583, 6584, 6585, 6586,
    6587, 6588, 6589, 6590, 6591, 6592, 6593, 6594,
    6595, 6596, 6597, 6598, 6599, 6600, 6601, 6602,
    6603, 6604, 6605, 6606, 6607, 6608, 6609, 6610,
    6611, 6612, 6613, 6614, 6615, 6616, 6617, 6618,
    6619, 6620, 6621, 6622, 6623, 6624, 6625, 6626,
    6627, 6628, 6629, 6630, 6631, 6632, 6633, 6634,
    6635, 6636, 6637, 6638, 6639, 6640, 6641, 6642,
    6643, 6644, 6645, 6646, 6647, 6648, 6649, 6650,
    6651, 6652, 6653, 6654, 6655, 6656, 6657, 6658,
    6659, 6660, 6661, 6662, 6663, 6664, 6665, 6666,
    6667, 6668, 6669, 6670, 6671, 6672, 6673, 6674,
    6675, 6676, 6677, 6678, 6679, 6680, 6681, 6682,
    6683, 6684, 6685, 6686, 6687, 6688, 6689, 6690,
    6691, 6692, 6693, 6694, 6695, 6696, 6697, 6698,
    6699, 6700, 6701, 6702, 6703, 6704, 6705, 6706,
    6707, 6708, 6709, 6710, 6711, 6712, 6713, 6714,
    6715, 6716, 6717, 6718, 6719, 6720, 6721, 6722,
    6723, 6724, 6725, 6726, 6727, 6728, 6729, 6730,
    6731, 6732, 6733, 6734, 6735, 6736, 6737, 6738,
    6739, 6740, 6741, 6742, 6743, 6744, 6745, 6746,
    6747, 6748, 6749, 6750, 6751, 6752, 6753, 6754,
    6755, 6756, 6757, 6758, 6759, 6760, 6761, 6762,
    6764, 6765, 6766, 6767, 6768, 6769, 6770, 6771,
    6772, 6773, 6774, 6775, 6776, 6777, 6778, 6779,
    6780, 6781, 6782, 6783, 6784, 6785, 6786, 6787,
    6788, 6789, 6790, 6791, 6792, 6793, 6794, 6795,
    6796, 6797, 6798, 6799, 6800, 6801, 6802, 6803,
    6804, 6805, 6806, 6807, 6808, 6809, 6810, 6811,
    6812, 6813, 6814, 6815, 6816, 6817, 6818, 6819,
    6820, 6821, 6822, 6823, 6824, 6825, 6826, 6827,
    6828, 6829, 6830, 6831, 6832, 6833, 6834, 6835,
    6836, 6837, 6838, 6839, 6840, 6841, 6842, 6843,
    6844, 6845, 6846, 6847, 6848, 6849, 6850, 6851,
    6852, 6853, 6854, 6855, 6856, 6857, 6858, 6859,
    6860, 6861, 6862, 6863, 6864, 6865, 6866, 6867,
    6868, 6869, 6870, 6871, 6872, 6873, 6874, 6875,
    6876, 6877, 6878, 6879, 6880, 6881, 6882, 6883,
    6884, 6885, 6886, 6887, 6888, 6889, 6890, 6891,
    6892, 6893, 6894, 6895, 6896, 6897, 6898, 6899,
    6900, 6901, 6902, 6903, 6904, 6905, 6906, 6907,
    6908, 6909, 6910, 6911, 6912, 6913, 6914, 6915,
    6916, 6917, 6918, 6919, 6920, 6921, 6922, 6923,
    6924, 6925, 6926, 6927, 6928, 6929, 6930, 6931,
    6932, 6933, 6934, 6935, 6936, 6937, 6938, 6939,
    6940, 6941, 6942, 6943, 6944, 6945, 6947, 6948,
    6949, 6950, 6951, 6952, 6953, 6954, 6955, 6956,
    6957, 6958, 6959, 6960, 6961, 6962, 6963, 6964,
    6965, 6966, 6967, 6968, 6969, 6970, 6971, 6972,
    6973, 6974, 6975, 6976, 6977, 6978, 6979, 6980,
    6981, 6982, 6983, 6984, 6985, 6986, 6987, 6988,
    6989, 6990, 6991, 6992, 6993, 6994, 6995, 6996,
    6997, 6998, 6999, 7000, 7001, 7002, 7003, 7004,
    7005, 7006, 7007, 7008, 7009, 7010, 7011, 7012,
    7013, 7014, 7015, 7016, 7017, 7018, 7019, 7020,
    7021, 7022, 7023, 7024, 7025, 7026, 7027, 7028,
    7029, 7030, 7031, 7032, 7033, 7034, 7035, 7036,
    7037, 7038, 7039, 7040, 7041, 7042, 7043, 7044,
    7045, 7046, 7047, 7048, 7049, 7050, 7051, 7052,
    7053, 7054, 7055, 7056, 7057, 7058, 7059, 7060,
    7061, 7062, 7063, 7064, 7065, 7066, 7067, 7068,
    7069, 7070, 7071, 7072, 7073, 7074, 7075, 7076,
    7077, 7078, 7079, 7080, 7081, 7082, 7083, 7084,
    7085, 7086, 7087, 7088, 7089, 7090, 7091, 7092,
    7093, 7094, 7095, 7096, 7097, 7098, 7099, 7100,
    7101, 7102, 7103, 7104, 7105, 7106, 7107, 7108,
    7109, 7110, 7111, 7112, 7113, 7114, 7115, 7116,
    7117, 7118, 7119, 7121, 7122, 7123, 7124, 7125,
    7126, 7127, 7128, 7129, 7130, 7131, 7132, 7133,
    7134, 7135, 7136, 7137, 7138, 7139, 7140, 7141,
    7142, 7143, 7144, 7145, 7146, 7147, 7148, 7149,
    7150, 7151, 7152, 7153, 7154, 7155, 7156, 7157,
    7158, 7159, 7160, 7161, 7162, 7163, 7164, 7165,
    7166, 7167, 7168, 7169, 7170, 7171, 7172, 7173,
    7174, 7175, 7176, 7177, 7178, 7179, 7180, 7181,
    7182, 7183, 7184, 7185, 7186, 7187, 7188, 7189,
    7190, 7191, 7192, 7193, 7194, 7195, 7196, 7197,
    7198, 7199, 7200, 7201, 7202, 7203, 7204, 7205,
    7206, 7207, 7208, 7209, 7210, 7211, 7212, 7213,
    7214, 7215, 7216, 7217, 7218, 7219, 7220, 7221,
    7222, 7223, 7224, 7225, 7226, 7227, 7228, 7229,
    7230, 7231, 7232, 7233, 7234, 7235, 7236, 7237,
    7238, 7239, 7240, 7241, 7242, 7243, 7244, 7245,
    7246, 7247, 7248, 7249, 7250, 7251, 7252, 7253,
    7254, 7255, 7256, 7257, 7258, 7259, 7260, 7261,
    7262, 7263, 7264, 7265, 7266, 7267, 7268, 7269,
    7270, 7271, 7272, 7273, 7274, 7275, 7276, 7277,
    7278, 7279, 7280, 7281, 7282, 7283, 7284, 7285,
    7287, 7288, 7289, 7290, 7291, 7292, 7293, 7294,
    7295, 7296, 7297, 7298, 7299, 7300, 7301, 7302,
    7303, 7304, 7305, 7306, 7307, 7308, 7309, 7310,
    7311, 7312, 7313, 7314, 7315, 7316, 7317, 7318,
    7319, 7320, 7321, 7322, 7323, 7324, 7325, 7326,
    7327, 7328, 7329, 7330, 7331, 7332, 7333, 7334,
    7335, 7336, 7337, 7338, 7339, 7340, 7341, 7342,
    7343, 7344, 7345, 7346, 7347, 7348, 7349, 7350,
    7351, 7352, 7353, 7354, 7355, 7356, 7357, 7358,
    7359, 7360, 7361, 7362, 7363, 7364, 7365, 7366,
    7367, 7368, 7369, 7370, 7371, 7372, 7373, 7374,
    7375, 7376, 7377, 7378, 7379, 7380, 7381, 7382,
    7383, 7384, 7385, 7386, 7387, 7388, 7389, 7390,
    7391, 7392, 7393, 7394, 7395, 7396, 7397, 7398,
    7399, 7400, 7401, 7402, 7403, 7404, 7405, 7406,
    7407, 7408, 7409, 7410, 7411, 7412, 7413, 7414,
    7415, 7416, 7417, 7418, 7419, 7420, 7421, 7422,
    7423, 7424, 7425, 7426, 7427, 7428, 7429, 7430,
    7431, 7432, 7433, 7434, 7435, 7436, 7437, 7438,
    7439, 7440, 7441, 7442, 7443, 7445, 7446, 7447,
    7448, 7449, 7450, 7451, 7452, 7453, 7454, 7455,
    7456, 7457, 7458, 7459, 7460, 7461, 7462, 7463,
    7464, 7465, 7466, 7467, 7468, 7469, 7470, 7471,
    7472, 7473, 7474, 7475, 7476, 7477, 7478, 7479,
    7480, 7481, 7482, 7483, 7484, 7485, 7486, 7487,
    7488, 7489, 7490, 7491, 7492, 7493, 7494, 7495,
    7496, 7497, 7498, 7499, 7500, 7501, 7502, 7503,
    7504, 7505, 7506, 7507, 7508, 7509, 7510, 7511,
    7512, 7513, 7514, 7515, 7516, 7517, 7518, 7519,
    7520, 7521, 7522, 7523, 7524, 7525, 7526, 7527,
    7528, 7529, 7530, 7531, 7532, 7533, 7534, 7535,
    7536, 7537, 7538, 7539, 7540, 7541, 7542, 7543,
    7544, 7545, 7546, 7547, 7548, 7549, 7550, 7551,
    7552, 7553, 7554, 7555, 7556, 7557, 7558, 7559,
    7560, 7561, 7562, 7563, 7564, 7565, 7566, 7567,
    7568, 7569, 7570, 7571, 7572, 7573, 7574, 7575,
    7576, 7577, 7578, 7579, 7580, 7581, 7582, 7583,
    7584, 7585, 7586, 7587, 7588, 7589, 7590, 7591,
    7592, 7593, 7594, 7595, 7597, 7598, 7599, 7600,
    7601, 7602, 7603, 7604, 7605, 7606, 7607, 7608,
    7609, 7610, 7611, 7612, 7613, 7614, 7615, 7616,
    7617, 7618, 7619, 7620, 7621, 7622, 7623, 7624,
    7625, 7626, 7627, 7628, 7629, 7630, 7631, 7632,
    7633, 7634, 7635, 7636, 7637, 7638, 7639, 7640,
    7641, 7642, 7643, 7644, 7645, 7646, 7647, 7648,
    7649, 7650, 7651, 7652, 7653, 7654, 7655, 7656,
    7657, 7658, 7659, 7660, 7661, 7662, 7663, 7664,
    7665, 7666, 7667, 7668, 7669, 7670, 7671, 7672,
    7673, 7674, 7675, 7676, 7677, 7678, 7679, 7680,
    7681, 7682, 7683, 7684, 7685, 7686, 7687, 7688,
    7689, 7690, 7691, 7692, 7693, 7694, 7695, 7696,
    7697, 7698, 7699, 7700, 7701, 7702, 7703, 7704,
    7705, 7706, 7707, 7708, 7709, 7710, 7711, 7712,
    7713, 7714, 7715, 7716, 7717, 7718, 7719, 7720,
    7721, 7722, 7723, 7724, 7725, 7726, 7727, 7728,
    7729, 7730, 7731, 7732, 7733, 7734, 7735, 7736,
    7737, 7738, 7739, 7740, 7741, 7743, 7744, 7745,
    7746, 7747, 7748, 7749, 7750, 7751, 7752, 7753,
    7754, 7755, 7756, 7757, 7758, 7759, 7760, 7761,
    7762, 7763, 7764, 7765, 7766, 7767, 7768, 7769,
    7770, 7771, 7772, 7773, 7774, 7775, 7776, 7777,
    7778, 7779, 7780, 7781, 7782, 7783, 7784, 7785,
    7786, 7787, 7788, 7789, 7790, 7791, 7792, 7793,
    7794, 7795, 7796, 7797, 7798, 7799, 7800, 7801,
    7802, 7803, 7804, 7805, 7806, 7807, 7808, 7809,
    7810, 7811, 7812, 7813, 7814, 7815, 7816, 7817,
    7818, 7819, 7820, 7821, 7822, 7823, 7824, 7825,
    7826, 7827, 7828, 7829, 7830, 7831, 7832, 7833,
    7834, 7835, 7836, 7837, 7838, 7839, 7840, 7841,
    7842, 7843, 7844, 7845, 7846, 7847, 7848, 7849,
    7850, 7851, 7852, 7853, 7854, 7855, 7856, 7857,
    7858, 7859, 7860, 7861, 7862, 7863, 7864, 7865,
    7866, 7867, 7868, 7869, 7870, 7871, 7872, 7873,
    7874, 7875, 7876, 7877, 7878, 7879, 7880, 7881,
    7882, 7884, 7885, 7886, 7887, 7888, 7889, 7890,
    7891, 7892, 7893, 7894, 7895, 7896, 7897, 7898,
    7899, 7900, 7901, 7902, 7903, 7904, 7905, 7906,
    7907, 7908, 7909, 7910, 7911, 7912, 7913, 7914,
    7915, 7916, 7917, 7918, 7919, 7920, 7921, 7922,
    7923, 7924, 7925, 7926, 7927, 7928, 7929, 7930,
    7931, 7932, 7933, 7934, 7935, 7936, 7937, 7938,
    7939, 7940, 7941, 7942, 7943, 7944, 7945, 7946,
    7947, 7948, 7949, 7950, 7951, 7952, 7953, 7954,
    7955, 7956, 7957, 7958, 7959, 7960, 7961, 7962,
    7963, 7964, 7965, 7966, 7967, 7968, 7969, 7970,
    7971, 7972, 7973, 7974, 7975, 7976, 7977, 7978,
    7979, 7980, 7981, 7982, 7983, 7984, 7985, 7986,
    7987, 7988, 7989, 7990, 7991, 7992, 7993, 7994,
    7995, 7996, 7997, 7998, 7999, 8000, 8001, 8002,
    8003, 8004, 8005, 8006, 8007, 8008, 8009, 8010,
    8011, 8012, 8013, 8014, 8015, 8016, 8017, 8018,
    8020, 8021, 8022, 8023, 8024, 8025, 8026, 8027,
    8028, 8029, 8030, 8031, 8032, 8033, 8034, 8035,
    8036, 8037, 8038, 8039, 8040, 8041, 8042, 8043,
    8044, 8045, 8046, 8047, 8048, 8049, 8050, 8051,
    8052, 8053, 8054, 8055, 8056, 8057, 8058, 8059,
    8060, 8061, 8062, 8063, 8064, 8065, 8066, 8067,
    8068, 8069, 8070, 8071, 8072, 8073, 8074, 8075,
    8076, 8077, 8078, 8079, 8080, 8081, 8082, 8083,
    8084, 8085, 8086, 8087, 8088, 8089, 8090, 8091,
    8092, 8093, 8094, 8095, 8096, 8097, 8098, 8099,
    8100, 8101, 8102, 8103, 8104, 8105, 8106, 8107,
    8108, 8109, 8110, 8111, 8112, 8113, 8114, 8115,
    8116, 8117, 8118, 8119, 8120, 8121, 8122, 8123,
    8124, 8125, 8126, 8127, 8128, 8129, 8130, 8131,
    8132, 8133, 8134, 8135, 8136, 8137, 8138, 8139,
    8140, 8141, 8142, 8143, 8144, 8145, 8146, 8147,
    8148, 8149, 8150, 8152, 8153, 8154, 8155, 8156,
    8157, 8158, 8159, 8160, 8161, 8162, 8163, 8164,
    8165, 8166, 8167, 8168, 8169, 8170, 8171, 8172,
    8173, 8174, 8175, 8176, 8177, 8178, 8179, 8180,
    8181, 8182, 8183, 8184, 8185, 8186, 8187, 8188,
    8189, 8190, 8191, 8192, 8193, 8194, 8195, 8196,
    8197, 8198, 8199, 8200, 8201, 8202, 8203, 8204,
    8205, 8206, 8207, 8208, 8209, 8210, 8211, 8212,
    8213, 8214, 8215, 8216, 8217, 8218, 8219, 8220,
    8221, 8222, 8223, 8224, 8225, 8226, 8227, 8228,
    8229, 8230, 8231, 8232, 8233, 8234, 8235, 8236,
    8237, 8238, 8239, 8240, 8241, 8242, 8243, 8244,
    8245, 8246, 8247, 8248, 8249, 8250, 8251, 8252,
    8253, 8254, 8255, 8256, 8257, 8258, 8259, 8260,
    8261, 8262, 8263, 8264, 8265, 8266, 8267, 8268,
    8269, 8270, 8271, 8272, 8273, 8274, 8275, 8276,
    8277, 8279, 8280, 8281, 8282, 8283, 8284, 8285,
    8286, 8287, 8288, 8289, 8290, 8291, 8292, 8293,
    8294, 8295, 8296, 8297, 8298, 8299, 8300, 8301,
    8302, 8303, 8304, 8305, 8306, 8307, 8308, 8309,
    8310, 8311, 8312, 8313, 8314, 8315, 8316, 8317,
    8318, 8319, 8320, 8321, 8322, 8323, 8324, 8325,
    8326, 8327, 8328, 8329, 8330, 8331, 8332, 8333,
    8334, 8335, 8336, 8337, 8338, 8339, 8340, 8341,
    8342, 8343, 8344, 8345, 8346, 8347, 8348, 8349,
    8350, 8351, 8352, 8353, 8354, 8355, 8356, 8357,
    8358, 8359, 8360, 8361, 8362, 8363, 8364, 8365,
    8366, 8367, 8368, 8369, 8370, 8371, 8372, 8373,
    8374, 8375, 8376, 8377, 8378, 8379, 8380, 8381,
    8382, 8383, 8384, 8385, 8386, 8387, 8388, 8389,
    8390, 8391, 8392, 8393, 8394, 8395, 8396, 8397,
    8398, 8399, 8400, 8401, 8403, 8404, 8405, 8406,
    8407, 8408, 8409, 8410, 8411, 8412, 8413, 8414,
    8415, 8416, 8417, 8418, 8419, 8420, 8421, 8422,
    8423, 8424, 8425, 8426, 8427, 8428, 8429, 8430,
    8431, 8432, 8433, 8434, 8435, 8436, 8437, 8438,
    8439, 8440, 8441, 8442, 8443, 8444, 8445, 8446,
    8447, 8448, 8449, 8450, 8451, 8452, 8453, 8454,
    8455, 8456, 8457, 8458, 8459, 8460, 8461, 8462,
    8463, 8464, 8465, 8466, 8467, 8468, 8469, 8470,
    8471, 8472, 8473, 8474, 8475, 8476, 8477, 8478,
    8479, 8480, 8481, 8482, 8483, 8484, 8485, 8486,
    8487, 8488, 8489, 8490, 8491, 8492, 8493, 8494,
    8495, 8496, 8497, 8498, 8499, 8500, 8501, 8502,
    8503, 8504, 8505, 8506, 8507, 8508, 8509, 8510,
    8511, 8512, 8513, 8514, 8515, 8516, 8517, 8518,
    8519, 8520, 8521, 8523, 8524, 8525, 8526, 8527,
    8528, 8529, 8530, 8531, 8532, 8533, 8534, 8535,
    8536, 8537, 8538, 8539, 8540, 8541, 8542, 8543,
    8544, 8545, 8546, 8547, 8548, 8549, 8550, 8551,
    8552, 8553, 8554, 8555, 8556, 8557, 8558, 8559,
    8560, 8561, 8562, 8563, 8564, 8565, 8566, 8567,
    8568, 8569, 8570, 8571, 8572, 8573, 8574, 8575,
    8576, 8577, 8578, 8579, 8580, 8581, 8582, 8583,
    8584, 8585, 8586, 8587, 8588, 8589, 8590, 8591,
    8592, 8593, 8594, 8595, 8596, 8597, 8598, 8599,
    8600, 8601, 8602, 8603, 8604, 8605, 8606, 8607,
    8608, 8609, 8610, 8611, 8612, 8613, 8614, 8615,
    8616, 8617, 8618, 8619, 8620, 8621, 8622, 8623,
    8624, 8625, 8626, 8627, 8628, 8629, 8630, 8631,
    8632, 8633, 8634, 8635, 8636, 8637, 8638, 8640,
    8641, 8642, 8643, 8644, 8645, 8646, 8647, 8648,
    8649, 8650, 8651, 8652, 8653, 8654, 8655, 8656,
    8657, 8658, 8659, 8660, 8661, 8662, 8663, 8664,
    8665, 8666, 8667, 8668, 8669, 8670, 8671, 8672,
    8673, 8674, 8675, 8676, 8677, 8678, 8679, 8680,
    8681, 8682, 8683, 8684, 8685, 8686, 8687, 8688,
    8689, 8690, 8691, 8692, 8693, 8694, 8695, 8696,
    8697, 8698, 8699, 8700, 8701, 8702, 8703, 8704,
    8705, 8706, 8707, 8708, 8709, 8710, 8711, 8712,
    8713, 8714, 8715, 8716, 8717, 8718, 8719, 8720,
    8721, 8722, 8723, 8724, 8725, 8726, 8727, 8728,
    8729, 8730, 8731, 8732, 8733, 8734, 8735, 8736,
    8737, 8738, 8739, 8740, 8741, 8742, 8743, 8744,
    8745, 8746, 8747, 8748, 8749, 8750, 8751, 8752,
    8754, 8755, 8756, 8757, 8758, 8759, 8760, 8761,
    8762, 8763, 8764, 8765, 8766, 8767, 8768, 8769,
    8770, 8771, 8772, 8773, 8774, 8775, 8776, 8777,
    8778, 8779, 8780, 8781, 8782, 8783, 8784, 8785,
    8786, 8787, 8788, 8789, 8790, 8791, 8792, 8793,
    8794, 8795, 8796, 8797, 8798, 8799, 8800, 8801,
    8802, 8803, 8804, 8805, 8806, 8807, 8808, 8809,
    8810, 8811, 8812, 8813, 8814, 8815, 8816, 8817,
    8818, 8819, 8820, 8821, 8822, 8823, 8824, 8825,
    8826, 8827, 8828, 8829, 8830, 8831, 8832, 8833,
    8834, 8835, 8836, 8837, 8838, 8839, 8840, 8841,
    8842, 8843, 8844, 8845, 8846, 8847, 8848, 8849,
    8850, 8851, 8852, 8853, 8854, 8855, 8856, 8857,
    8858, 8859, 8860, 8861, 8862, 8864, 8865, 8866,
    8867, 8868, 8869, 8870, 8871, 8872, 8873, 8874,
    8875, 8876, 8877, 8878, 8879, 8880, 8881, 8882,
    8883, 8884, 8885, 8886, 8887, 8888, 8889, 8890,
    8891, 8892, 8893, 8894, 8895, 8896, 8897, 8898,
    8899, 8900, 8901, 8902, 8903, 8904, 8905, 8906,
    8907, 8908, 8909, 8910, 8911, 8912, 8913, 8914,
    8915, 8916, 8917, 8918, 8919, 8920, 8921, 8922,
    8923, 8924, 8925, 8926, 8927, 8928, 8929, 8930,
    8931, 8932, 8933, 8934, 8935, 8936, 8937, 8938,
    8939, 8940, 8941, 8942, 8943, 8944, 8945, 8946,
    8947, 8948, 8949, 8950, 8951, 8952, 8953, 8954,
    8955, 8956, 8957, 8958, 8959, 8960, 8961, 8962,
    8963, 8964, 8965, 8966, 8967, 8968, 8969, 8970,
    8971, 8973, 8974, 8975, 8976, 8977, 8978, 8979,
    8980, 8981, 8982, 8983, 8984, 8985, 8986, 8987,
    8988, 8989, 8990, 8991, 8992, 8993, 8994, 8995,
    8996, 8997, 8998, 8999, 9000, 9001, 9002, 9003,
    9004, 9005, 9006, 9007, 9008, 9009, 9010, 9011,
    9012, 9013, 9014, 9015, 9016, 9017, 9018, 9019,
    9020, 9021, 9022, 9023, 9024, 9025, 9026, 9027,
    9028, 9029, 9030, 9031, 9032, 9033, 9034, 9035,
    9036, 9037, 9038, 9039, 9040, 9041, 9042, 9043,
    9044, 9045, 9046, 9047, 9048, 9049, 9050, 9051,
    9052, 9053, 9054, 9055, 9056, 9057, 9058, 9059,
    9060, 9061, 9062, 9063, 9064, 9065, 9066, 9067,
    9068, 9069, 9070, 9071, 9072, 9073, 9074, 9075,
    9076, 9078, 9079, 9080, 9081, 9082, 9083, 9084,
    9085, 9086, 9087, 9088, 9089, 9090, 9091, 9092,
    9093, 9094, 9095, 9096, 9097, 9098, 9099, 9100,
    9101, 9102, 9103, 9104, 9105, 9106, 9107, 9108,
    9109, 9110, 9111, 9112, 9113, 9114, 9115, 9116,
    9117, 9118, 9119, 9120, 9121, 9122, 9123, 9124,
    9125, 9126, 9127, 9128, 9129, 9130, 9131, 9132,
    9133, 9134, 9135, 9136, 9137, 9138, 9139, 9140,
    9141, 9142, 9143, 9144, 9145, 9146, 9147, 9148,
    9149, 9150, 9151, 9152, 9153, 9154, 9155, 9156,
    9157, 9158, 9159, 9160, 9161, 9162, 9163, 9164,
    9165, 9166, 9167, 9168, 9169, 9170, 9171, 9172,
    9173, 9174, 9175, 9176, 9177, 9178, 9179, 9181,
    9182, 9183, 9184, 9185, 9186, 9187, 9188, 9189,
    9190, 9191, 9192, 9193, 9194, 9195, 9196, 9197,
    9198, 9199, 9200, 9201, 9202, 9203, 9204, 9205,
    9206, 9207, 9208, 9209, 9210, 9211, 9212, 9213,
    9214, 9215, 9216, 9217, 9218, 9219, 9220, 9221,
    9222, 9223, 9224, 9225, 9226, 9227, 9228, 9229,
    9230, 9231, 9232, 9233, 9234, 9235, 9236, 9237,
    9238, 9239, 9240, 9241, 9242, 9243, 9244, 9245,
    9246, 9247, 9248, 9249, 9250, 9251, 9252, 9253,
    9254, 9255, 9256, 9257, 9258, 9259, 9260, 9261,
    9262, 9263, 9264, 9265, 9266, 9267, 9268, 9269,
    9270, 9271, 9272, 9273, 9274, 9275, 9276, 9277,
    9278, 9279, 9280, 9282, 9283, 9284, 9285, 9286,
    9287, 9288, 9289, 9290, 9291, 9292, 9293, 9294,
    9295, 9296, 9297, 9298, 9299, 9300, 9301, 9302,
    9303, 9304, 9305, 9306, 9307, 9308, 9309, 9310,
    9311, 9312, 9313, 9314, 9315, 9316, 9317, 9318,
    9319, 9320, 9321, 9322, 9323, 9324, 9325, 9326,
    9327, 9328, 9329, 9330, 9331, 9332, 9333, 9334,
    9335, 9336, 9337, 9338, 9339, 9340, 9341, 9342,
    9343, 9344, 9345, 9346, 9347, 9348, 9349, 9350,
    9351, 9352, 9353, 9354, 9355, 9356, 9357, 9358,
    9359, 9360, 9361, 9362, 9363, 9364, 9365, 9366,
    9367, 9368, 9369, 9370, 9371, 9372, 9373, 9374,
    9375, 9376, 9377, 9378, 9379, 9381, 9382, 9383,
    9384, 9385, 9386, 9387, 9388, 9389, 9390, 9391,
    9392, 9393, 9394, 9395, 9396, 9397, 9398, 9399,
    9400, 9401, 9402, 9403, 9404, 9405, 9406, 9407,
    9408, 9409, 9410, 9411, 9412, 9413, 9414, 9415,
    9416, 9417, 9418, 9419, 9420, 9421, 9422, 9423,
    9424, 9425, 9426, 9427, 9428, 9429, 9430, 9431,
    9432, 9433, 9434, 9435, 9436, 9437, 9438, 9439,
    9440, 9441, 9442, 9443, 9444, 9445, 9446, 9447,
    9448, 9449, 9450, 9451, 9452, 9453, 9454, 9455,
    9456, 9457, 9458, 9459, 9460, 9461, 9462, 9463,
    9464, 9465, 9466, 9467, 9468, 9469, 9470, 9471,
    9472, 9473, 9474, 9475, 9476, 9478, 9479, 9480,
    9481, 9482, 9483, 9484, 9485, 9486, 9487, 9488,
    9489, 9490, 9491, 9492, 9493, 9494, 9495, 9496,
    9497, 9498, 9499, 9500, 9501, 9502, 9503, 9504,
    9505, 9506, 9507, 9508, 9509, 9510, 9511, 9512,
    9513, 9514, 9515, 9516, 9517, 9518, 9519, 9520,
    9521, 9522, 9523, 9524, 9525, 9526, 9527, 9528,
    9529, 9530, 9531, 9532, 9533, 9534, 9535, 9536,
    9537, 9538, 9539, 9540, 9541, 9542, 9543, 9544,
    9545, 9546, 9547, 9548, 9549, 9550, 9551, 9552,
    9553, 9554, 9555, 9556, 9557, 9558, 9559, 9560,
    9561, 9562, 9563, 9564, 9565, 9566, 9567, 9568,
    9569, 9570, 9571, 9573, 9574, 9575, 9576, 9577,
    9578, 9579, 9580, 9581, 9582, 9583, 9584, 9585,
    9586, 9587, 9588, 9589, 9590, 9591, 9592, 9593,
    9594, 9595, 9596, 9597, 9598, 9599, 9600, 9601,
    9602, 9603, 9604, 9605, 9606, 9607, 9608, 9609,
    9610, 9611, 9612, 9613, 9614, 9615, 9616, 9617,
    9618, 9619, 9620, 9621, 9622, 9623, 9624, 9625,
    9626, 9627, 9628, 9629, 9630, 9631, 9632, 9633,
    9634, 9635, 9636, 9637, 9638, 9639, 9640, 9641,
    9642, 9643, 9644, 9645, 9646, 9647, 9648, 9649,
    9650, 9651, 9652, 9653, 9654, 9655, 9656, 9657,
    9658, 9659, 9660, 9661, 9662, 9663, 9664, 9666,
    9667, 9668, 9669, 9670, 9671, 9672, 9673, 9674,
    9675, 9676, 9677, 9678, 9679, 9680, 9681, 9682,
    9683, 9684, 9685, 9686, 9687, 9688, 9689, 9690,
    9691, 9692, 9693, 9694, 9695, 9696, 9697, 9698,
    9699, 9700, 9701, 9702, 9703, 9704, 9705, 9706,
    9707, 9708, 9709, 9710, 9711, 9712, 9713, 9714,
    9715, 9716, 9717, 9718, 9719, 9720, 9721, 9722,
    9723, 9724, 9725, 9726, 9727, 9728, 9729, 9730,
    9731, 9732, 9733, 9734, 9735, 9736, 9737, 9738,
    9739, 9740, 9741, 9742, 9743, 9744, 9745, 9746,
    9747, 9748, 9749, 9750, 9751, 9752, 9753, 9754,
    9755, 9757, 9758, 9759, 9760, 9761, 9762, 9763,
    9764, 9765, 9766, 9767, 9768, 9769, 9770, 9771,
    9772, 9773, 9774, 9775, 9776, 9777, 9778, 9779,
    9780, 9781, 9782, 9783, 9784, 9785, 9786, 9787,
    9788, 9789, 9790, 9791, 9792, 9793, 9794, 9795,
    9796, 9797, 9798, 9799, 9800, 9801, 9802, 9803,
    9804, 9805, 9806, 9807, 9808, 9809, 9810, 9811,
    9812, 9813, 9814, 9815, 9816, 9817, 9818, 9819,
    9820, 9821, 9822, 9823, 9824, 9825, 9826, 9827,
    9828, 9829, 9830, 9831, 9832, 9833, 9834, 9835,
    9836, 9837, 9838, 9839, 9840, 9841, 9842, 9843,
    9844, 9845, 9847, 9848, 9849, 9850, 9851, 9852,
    9853, 9854, 9855, 9856, 9857, 9858, 9859, 9860,
    9861, 9862, 9863, 9864, 9865, 9866, 9867, 9868,
    9869, 9870, 9871, 9872, 9873, 9874, 9875, 9876,
    9877, 9878, 9879, 9880, 9881, 9882, 9883, 9884,
    9885, 9886, 9887, 9888, 9889, 9890, 9891, 9892,
    9893, 9894, 9895, 9896, 9897, 9898, 9899, 9900,
    9901, 9902, 9903, 9904, 9905, 9906, 9907, 9908,
    9909, 9910, 9911, 9912, 9913, 9914, 9915, 9916,
    9917, 9918, 9919, 9920, 9921, 9922, 9923, 9924,
    9925, 9926, 9927, 9928, 9929, 9930, 9931, 9932,
    9933, 9935, 9936, 9937, 9938, 9939, 9940, 9941,
    9942, 9943, 9944, 9945, 9946, 9947, 9948, 9949,
    9950, 9951, 9952, 9953, 9954, 9955, 9956, 9957,
    9958, 9959, 9960, 9961, 9962, 9963, 9964, 9965,
    9966, 9967, 9968, 9969, 9970, 9971, 9972, 9973,
    9974, 9975, 9976, 9977, 9978, 9979, 9980, 9981,
    9982, 9983, 9984, 9985, 9986, 9987, 9988, 9989,
    9990, 9991, 9992, 9993, 9994, 9995, 9996, 9997,
    9998, 9999, 10000, 10001, 10002, 10003, 10004, 10005,
    10006, 10007, 10008, 10009, 10010, 10011, 10012, 10013,
    10014, 10015, 10016, 10017, 10018, 10019, 10021, 10022,
    10023, 10024, 10025, 10026, 10027, 10028, 10029, 10030,
    10031, 10032, 10033, 10034, 10035, 10036, 10037, 10038,
    10039, 10040, 10041, 10042, 10043, 10044, 10045, 10046,
    10047, 10048, 10049, 10050, 10051, 10052, 10053, 10054,
    10055, 10056, 10057, 10058, 10059, 10060, 10061, 10062,
    10063, 10064, 10065, 10066, 10067, 10068, 10069, 10070,
    10071, 10072, 10073, 10074, 10075, 10076, 10077, 10078,
    10079, 10080, 10081, 10082, 10083, 10084, 10085, 10086,
    10087, 10088, 10089, 10090, 10091, 10092, 10093, 10094,
    10095, 10096, 10097, 10098, 10099, 10100, 10101, 10102,
    10103, 10104, 10106, 10107, 10108, 10109, 10110, 10111,
    10112, 10113, 10114, 10115, 10116, 10117, 10118, 10119,
    10120, 10121, 10122, 10123, 10124, 10125, 10126, 10127,
    10128, 10129, 10130, 10131, 10132, 10133, 10134, 10135,
    10136, 10137, 10138, 10139, 10140, 10141, 10142, 10143,
    10144, 10145, 10146, 10147, 10148, 10149, 10150, 10151,
    10152, 10153, 10154, 10155, 10156, 10157, 10158, 10159,
    10160, 10161, 10162, 10163, 10164, 10165, 10166, 10167,
    10168, 10169, 10170, 10171, 10172, 10173, 10174, 10175,
    10176, 10177, 10178, 10179, 10180, 10181, 10182, 10183,
    10184, 10185, 10186, 10187, 10188, 10190, 10191, 10192,
    10193, 10194, 10195, 10196, 10197, 10198, 10199, 10200,
    10201, 10202, 10203, 10204, 10205, 10206, 10207, 10208,
    10209, 10210, 10211, 10212, 10213, 10214, 10215, 10216,
    10217, 10218, 10219, 10220, 10221, 10222, 10223, 10224,
    10225, 10226, 10227, 10228, 10229, 10230, 10231, 10232,
    10233, 10234, 10235, 10236, 10237, 10238, 10239, 10240,
    10241, 10242, 10243, 10244, 10245, 10246, 10247, 10248,
    10249, 10250, 10251, 10252, 10253, 10254, 10255, 10256,
    10257, 10258, 10259, 10260, 10261, 10262, 10263, 10264,
    10265, 10266, 10267, 10268, 10269, 10270, 10272, 10273,
    10274, 10275, 10276, 10277, 10278, 10279, 10280, 10281,
    10282, 10283, 10284, 10285, 10286, 10287, 10288, 10289,
    10290, 10291, 10292, 10293, 10294, 10295, 10296, 10297,
    10298, 10299, 10300, 10301, 10302, 10303, 10304, 10305,
    10306, 10307, 10308, 10309, 10310, 10311, 10312, 10313,
    10314, 10315, 10316, 10317, 10318, 10319, 10320, 10321,
    10322, 10323, 10324, 10325, 10326, 10327, 10328, 10329,
    10330, 10331, 10332, 10333, 10334, 10335, 10336, 10337,
    10338, 10339, 10340, 10341, 10342, 10343, 10344, 10345,
    10346, 10347, 10348, 10349, 10350, 10351, 10353, 10354,
    10355, 10356, 10357, 10358, 10359, 10360, 10361, 10362,
    10363, 10364, 10365, 10366, 10367, 10368, 10369, 10370,
    10371, 10372, 10373, 10374, 10375, 10376, 10377, 10378,
    10379, 10380, 10381, 10382, 10383, 10384, 10385, 10386,
    10387, 10388, 10389, 10390, 10391, 10392, 10393, 10394,
    10395, 10396, 10397, 10398, 10399, 10400, 10401, 10402,
    10403, 10404, 10405, 10406, 10407, 10408, 10409, 10410,
    10411, 10412, 10413, 10414, 10415, 10416, 10417, 10418,
    10419, 10420, 10421, 10422, 10423, 10424, 10425, 10426,
    10427, 10428, 10429, 10430, 10431, 10433, 10434, 10435,
    10436, 10437, 10438, 10439, 10440, 10441, 10442, 10443,
    10444, 10445, 10446, 10447, 10448, 10449, 10450, 10451,
    10452, 10453, 10454, 10455, 10456, 10457, 10458, 10459,
    10460, 10461, 10462, 10463, 10464, 10465, 10466, 10467,
    10468, 10469, 10470, 10471, 10472, 10473, 10474, 10475,
    10476, 10477, 10478, 10479, 10480, 10481, 10482, 10483,
    10484, 10485, 10486, 10487, 10488, 10489, 10490, 10491,
    10492, 10493, 10494, 10495, 10496, 10497, 10498, 10499,
    10500, 10501, 10502, 10503, 10504, 10505, 10506, 10507,
    10508, 10509, 10511, 10512, 10513, 10514, 10515, 10516,
    10517, 10518, 10519, 10520, 10521, 10522, 10523, 10524,
    10525, 10526, 10527, 10528, 10529, 10530, 10531, 10532,
    10533, 10534, 10535, 10536, 10537, 10538, 10539, 10540,
    10541, 10542, 10543, 10544, 10545, 10546, 10547, 10548,
    10549, 10550, 10551, 10552, 10553, 10554, 10555, 10556,
    10557, 10558, 10559, 10560, 10561, 10562, 10563, 10564,
    10565, 10566, 10567, 10568, 10569, 10570, 10571, 10572,
    10573, 10574, 10575, 10576, 10577, 10578, 10579, 10580,
    10581, 10582, 10583, 10584, 10585, 10586, 10588, 10589,
    10590, 10591, 10592, 10593, 10594, 10595, 10596, 10597,
    10598, 10599, 10600, 10601, 10602, 10603, 10604, 10605,
    10606, 10607, 10608, 10609, 10610, 10611, 10612, 10613,
    10614, 10615, 10616, 10617, 10618, 10619, 10620, 10621,
    10622, 10623, 10624, 10625, 10626, 10627, 10628, 10629,
    10630, 10631, 10632, 10633, 10634, 10635, 10636, 10637,
    10638, 10639, 10640, 10641, 10642, 10643, 10644, 10645,
    10646, 10647, 10648, 10649, 10650, 10651, 10652, 10653,
    10654, 10655, 10656, 10657, 10658, 10659, 10660, 10661,
    10662, 10663, 10665, 10666, 10667, 10668, 10669, 10670,
    10671, 10672, 10673, 10674, 10675, 10676, 10677, 10678,
    10679, 10680, 10681, 10682, 10683, 10684, 10685, 10686,
    10687, 10688, 10689, 10690, 10691, 10692, 10693, 10694,
    10695, 10696, 10697, 10698, 10699, 10700, 10701, 10702,
    10703, 10704, 10705, 10706, 10707, 10708, 10709, 10710,
    10711, 10712, 10713, 10714, 10715, 10716, 10717, 10718,
    10719, 10720, 10721, 10722, 10723, 10724, 10725, 10726,
    10727, 10728, 10729, 10730, 10731, 10732, 10733, 10734,
    10735, 10736, 10737, 10738, 10740, 10741, 10742, 10743,
    10744, 10745, 10746, 10747, 10748, 10749, 10750, 10751,
    10752, 10753, 10754, 10755, 10756, 10757, 10758, 10759,
    10760, 10761, 10762, 10763, 10764, 10765, 10766, 10767,
    10768, 10769, 10770, 10771, 10772, 10773, 10774, 10775,
    10776, 10777, 10778, 10779, 10780, 10781, 10782, 10783,
    10784, 10785, 10786, 10787, 10788, 10789, 10790, 10791,
    10792, 10793, 10794, 10795, 10796, 10797, 10798, 10799,
    10800, 10801, 10802, 10803, 10804, 10805, 10806, 10807,
    10808, 10809, 10810, 10811, 10812, 10814, 10815, 10816,
    10817, 10818, 10819, 10820, 10821, 10822, 10823, 10824,
    10825, 10826, 10827, 10828, 10829, 10830, 10831, 10832,
    10833, 10834, 10835, 10836, 10837, 10838, 10839, 10840,
    10841, 10842, 10843, 10844, 10845, 10846, 10847, 10848,
    10849, 10850, 10851, 10852, 10853, 10854, 10855, 10856,
    10857, 10858, 10859, 10860, 10861, 10862, 10863, 10864,
    10865, 10866, 10867, 10868, 10869, 10870, 10871, 10872,
    10873, 10874, 10875, 10876, 10877, 10878, 10879, 10880,
    10881, 10882, 10883, 10884, 10885, 10887, 10888, 10889,
    10890, 10891, 10892, 10893, 10894, 10895, 10896, 10897,
    10898, 10899, 10900, 10901, 10902, 10903, 10904, 10905,
    10906, 10907, 10908, 10909, 10910, 10911, 10912, 10913,
    10914, 10915, 10916, 10917, 10918, 10919, 10920, 10921,
    10922, 10923, 10924, 10925, 10926, 10927, 10928, 10929,
    10930, 10931, 10932, 10933, 10934, 10935, 10936, 10937,
    10938, 10939, 10940, 10941, 10942, 10943, 10944, 10945,
    10946, 10947, 10948, 10949, 10950, 10951, 10952, 10953,
    10954, 10955, 10956, 10957, 10959, 10960, 10961, 10962,
    10963, 10964, 10965, 10966, 10967, 10968, 10969, 10970,
    10971, 10972, 10973, 10974, 10975, 10976, 10977, 10978,
    10979, 10980, 10981, 10982, 10983, 10984, 10985, 10986,
    10987, 10988, 10989, 10990, 10991, 10992, 10993, 10994,
    10995, 10996, 10997, 10998, 10999, 11000, 11001, 11002,
    11003, 11004, 11005, 11006, 11007, 11008, 11009, 11010,
    11011, 11012, 11013, 11014, 11015, 11016, 11017, 11018,
    11019, 11020, 11021, 11022, 11023, 11024, 11025, 11026,
    11027, 11028, 11029, 11031, 11032, 11033, 11034, 11035,
    11036, 11037, 11038, 11039, 11040, 11041, 11042, 11043,
    11044, 11045, 11046, 11047, 11048, 11049, 11050, 11051,
    11052, 11053, 11054, 11055, 11056, 11057, 11058, 11059,
    11060, 11061, 11062, 11063, 11064, 11065, 11066, 11067,
    11068, 11069, 11070, 11071, 11072, 11073, 11074, 11075,
    11076, 11077, 11078, 11079, 11080, 11081, 11082, 11083,
    11084, 11085, 11086, 11087, 11088, 11089, 11090, 11091,
    11092, 11093, 11094, 11095, 11096, 11097, 11098, 11099,
    11101, 11102, 11103, 11104, 11105, 11106, 11107, 11108,
    11109, 11110, 11111, 11112, 11113, 11114, 11115, 11116,
    11117, 11118, 11119, 11120, 11121, 11122, 11123, 11124,
    11125, 11126, 11127, 11128, 11129, 11130, 11131, 11132,
    11133, 11134, 11135, 11136, 11137, 11138, 11139, 11140,
    11141, 11142, 11143, 11144, 11145, 11146, 11147, 11148,
    11149, 11150, 11151, 11152, 11153, 11154, 11155, 11156,
    11157, 11158, 11159, 11160, 11161, 11162, 11163, 11164,
    11165, 11166, 11167, 11168, 11170, 11171, 11172, 11173,
    11174, 11175, 11176, 11177, 11178, 11179, 11180, 11181,
    11182, 11183, 11184, 11185, 11186, 11187, 11188, 11189,
    11190, 11191, 11192, 11193, 11194, 11195, 11196, 11197,
    11198, 11199, 11200, 11201, 11202, 11203, 11204, 11205,
    11206, 11207, 11208, 11209, 11210, 11211, 11212, 11213,
    11214, 11215, 11216, 11217, 11218, 11219, 11220, 11221,
    11222, 11223, 11224, 11225, 11226, 11227, 11228, 11229,
    11230, 11231, 11232, 11233, 11234, 11235, 11236, 11237,
    11239, 11240, 11241, 11242, 11243, 11244, 11245, 11246,
    11247, 11248, 11249, 11250, 11251, 11252, 11253, 11254,
    11255, 11256, 11257, 11258, 11259, 11260, 11261, 11262,
    11263, 11264, 11265, 11266, 11267, 11268, 11269, 11270,
    11271, 11272, 11273, 11274, 11275, 11276, 11277, 11278,
    11279, 11280, 11281, 11282, 11283, 11284, 11285, 11286,
    11287, 11288, 11289, 11290, 11291, 11292, 11293, 11294,
    11295, 11296, 11297, 11298, 11299, 11300, 11301, 11302,
    11303, 11304, 11305, 11307, 11308, 11309, 11310, 11311,
    11312, 11313, 11314, 11315, 11316, 11317, 11318, 11319,
    11320, 11321, 11322, 11323, 11324, 11325, 11326, 11327,
    11328, 11329, 11330, 11331, 11332, 11333, 11334, 11335,
    11336, 11337, 11338, 11339, 11340, 11341, 11342, 11343,
    11344, 11345, 11346, 11347, 11348, 11349, 11350, 11351,
    11352, 11353, 11354, 11355, 11356, 11357, 11358, 11359,
    11360, 11361, 11362, 11363, 11364, 11365, 11366, 11367,
    11368, 11369, 11370, 11371, 11372, 11374, 11375, 11376,
    11377, 11378, 11379, 11380, 11381, 11382, 11383, 11384,
    11385, 11386, 11387, 11388, 11389, 11390, 11391, 11392,
    11393, 11394, 11395, 11396, 11397, 11398, 11399, 11400,
    11401, 11402, 11403, 11404, 11405, 11406, 11407, 11408,
    11409, 11410, 11411, 11412, 11413, 11414, 11415, 11416,
    11417, 11418, 11419, 11420, 11421, 11422, 11423, 11424,
    11425, 11426, 11427, 11428, 11429, 11430, 11431, 11432,
    11433, 11434, 11435, 11436, 11437, 11438, 11440, 11441,
    11442, 11443, 11444, 11445, 11446, 11447, 11448, 11449,
    11450, 11451, 11452, 11453, 11454, 11455, 11456, 11457,
    11458, 11459, 11460, 11461, 11462, 11463, 11464, 11465,
    11466, 11467, 11468, 11469, 11470, 11471, 11472, 11473,
    11474, 11475, 11476, 11477, 11478, 11479, 11480, 11481,
    11482, 11483, 11484, 11485, 11486, 11487, 11488, 11489,
    11490, 11491, 11492, 11493, 11494, 11495, 11496, 11497,
    11498, 11499, 11500, 11501, 11502, 11503, 11505, 11506,
    11507, 11508, 11509, 11510, 11511, 11512, 11513, 11514,
    11515, 11516, 11517, 11518, 11519, 11520, 11521, 11522,
    11523, 11524, 11525, 11526, 11527, 11528, 11529, 11530,
    11531, 11532, 11533, 11534, 11535, 11536, 11537, 11538,
    11539, 11540, 11541, 11542, 11543, 11544, 11545, 11546,
    11547, 11548, 11549, 11550, 11551, 11552, 11553, 11554,
    11555, 11556, 11557, 11558, 11559, 11560, 11561, 11562,
    11563, 11564, 11565, 11566, 11567, 11568, 11570, 11571,
    11572, 11573, 11574, 11575, 11576, 11577, 11578, 11579,
    11580, 11581, 11582, 11583, 11584, 11585, 11586, 11587,
    11588, 11589, 11590, 11591, 11592, 11593, 11594, 11595,
    11596, 11597, 11598, 11599, 11600, 11601, 11602, 11603,
    11604, 11605, 11606, 11607, 11608, 11609, 11610, 11611,
    11612, 11613, 11614, 11615, 11616, 11617, 11618, 11619,
    11620, 11621, 11622, 11623, 11624, 11625, 11626, 11627,
    11628, 11629, 11630, 11631, 11632, 11634, 11635, 11636,
    11637, 11638, 11639, 11640, 11641, 11642, 11643, 11644,
    11645, 11646, 11647, 11648, 11649, 11650, 11651, 11652,
    11653, 11654, 11655, 11656, 11657, 11658, 11659, 11660,
    11661, 11662, 11663, 11664, 11665, 11666, 11667, 11668,
    11669, 11670, 11671, 11672, 11673, 11674, 11675, 11676,
    11677, 11678, 11679, 11680, 11681, 11682, 11683, 11684,
    11685, 11686, 11687, 11688, 11689, 11690, 11691, 11692,
    11693, 11694, 11695, 11697, 11698, 11699, 11700, 11701,
    11702, 11703, 11704, 11705, 11706, 11707, 11708, 11709,
    11710, 11711, 11712, 11713, 11714, 11715, 11716, 11717,
    11718, 11719, 11720, 11721, 11722, 11723, 11724, 11725,
    11726, 11727, 11728, 11729, 11730, 11731, 11732, 11733,
    11734, 11735, 11736, 11737, 11738, 11739, 11740, 11741,
    11742, 11743, 11744, 11745, 11746, 11747, 11748, 11749,
    11750, 11751, 11752, 11753, 11754, 11755, 11756, 11757,
    11758, 11760, 11761, 11762, 11763, 11764, 11765, 11766,
    11767, 11768, 11769, 11770, 11771, 11772, 11773, 11774,
    11775, 11776, 11777, 11778, 11779, 11780, 11781, 11782,
    11783, 11784, 11785, 11786, 11787, 11788, 11789, 11790,
    11791, 11792, 11793, 11794, 11795, 11796, 11797, 11798,
    11799, 11800, 11801, 11802, 11803, 11804, 11805, 11806,
    11807, 11808, 11809, 11810, 11811, 11812, 11813, 11814,
    11815, 11816, 11817, 11818, 11819, 11820, 11822, 11823,
    11824, 11825, 11826, 11827, 11828, 11829, 11830, 11831,
    11832, 11833, 11834, 11835, 11836, 11837, 11838, 11839,
    11840, 11841, 11842, 11843, 11844, 11845, 11846, 11847,
    11848, 11849, 11850, 11851, 11852, 11853, 11854, 11855,
    11856, 11857, 11858, 11859, 11860, 11861, 11862, 11863,
    11864, 11865, 11866, 11867, 11868, 11869, 11870, 11871,
    11872, 11873, 11874, 11875, 11876, 11877, 11878, 11879,
    11880, 11881, 11883, 11884, 11885, 11886, 11887, 11888,
    11889, 11890, 11891, 11892, 11893, 11894, 11895, 11896,
    11897, 11898, 11899, 11900, 11901, 11902, 11903, 11904,
    11905, 11906, 11907, 11908, 11909, 11910, 11911, 11912,
    11913, 11914, 11915, 11916, 11917, 11918, 11919, 11920,
    11921, 11922, 11923, 11924, 11925, 11926, 11927, 11928,
    11929, 11930, 11931, 11932, 11933, 11934, 11935, 11936,
    11937, 11938, 11939, 11940, 11941, 11942, 11944, 11945,
    11946, 11947, 11948, 11949, 11950, 11951, 11952, 11953,
    11954, 11955, 11956, 11957, 11958, 11959, 11960, 11961,
    11962, 11963, 11964, 11965, 11966, 11967, 11968, 11969,
    11970, 11971, 11972, 11973, 11974, 11975, 11976, 11977,
    11978, 11979, 11980, 11981, 11982, 11983, 11984, 11985,
    11986, 11987, 11988, 11989, 11990, 11991, 11992, 11993,
    11994, 11995, 11996, 11997, 11998, 11999, 12000, 12001,
    12002, 12004, 12005, 12006, 12007, 12008, 12009, 12010,
    12011, 12012, 12013, 12014, 12015, 12016, 12017, 12018,
    12019, 12020, 12021, 12022, 12023, 12024, 12025, 12026,
    12027, 12028, 12029, 12030, 12031, 12032, 12033, 12034,
    12035, 12036, 12037, 12038, 12039, 12040, 12041, 12042,
    12043, 12044, 12045, 12046, 12047, 12048, 12049, 12050,
    12051, 12052, 12053, 12054, 12055, 12056, 12057, 12058,
    12059, 12060, 12061, 12063, 12064, 12065, 12066, 12067,
    12068, 12069, 12070, 12071, 12072, 12073, 12074, 12075,
    12076, 12077, 12078, 12079, 12080, 12081, 12082, 12083,
    12084, 12085, 12086, 12087, 12088, 12089, 12090, 12091,
    12092, 12093, 12094, 12095, 12096, 12097, 12098, 12099,
    12100, 12101, 12102, 12103, 12104, 12105, 12106, 12107,
    12108, 12109, 12110, 12111, 12112, 12113, 12114, 12115,
    12116, 12117, 12118, 12119, 12120, 12122, 12123, 12124,
    12125, 12126, 12127, 12128, 12129, 12130, 12131, 12132,
    12133, 12134, 12135, 12136, 12137, 12138, 12139, 12140,
    12141, 12142, 12143, 12144, 12145, 12146, 12147, 12148,
    12149, 12150, 12151, 12152, 12153, 12154, 12155, 12156,
    12157, 12158, 12159, 12160, 12161, 12162, 12163, 12164,
    12165, 12166, 12167, 12168, 12169, 12170, 12171, 12172,
    12173, 12174, 12175, 12176, 12177, 12178, 12179, 12181,
    12182, 12183, 12184, 12185, 12186, 12187, 12188, 12189,
    12190, 12191, 12192, 12193, 12194, 12195, 12196, 12197,
    12198, 12199, 12200, 12201, 12202, 12203, 12204, 12205,
    12206, 12207, 12208, 12209, 12210, 12211, 12212, 12213,
    12214, 12215, 12216, 12217, 12218, 12219, 12220, 12221,
    12222, 12223, 12224, 12225, 12226, 12227, 12228, 12229,
    12230, 12231, 12232, 12233, 12234, 12235, 12236, 12238,
    12239, 12240, 12241, 12242, 12243, 12244, 12245, 12246,
    12247, 12248, 12249, 12250, 12251, 12252, 12253, 12254,
    12255, 12256, 12257, 12258, 12259, 12260, 12261, 12262,
    12263, 12264, 12265, 12266, 12267, 12268, 12269, 12270,
    12271, 12272, 12273, 12274, 12275, 12276, 12277, 12278,
    12279, 12280, 12281, 12282, 12283, 12284, 12285, 12286,
    12287, 12288, 12289, 12290, 12291, 12292, 12293, 12294,
    12296, 12297, 12298, 12299, 12300, 12301, 12302, 12303,
    12304, 12305, 12306, 12307, 12308, 12309, 12310, 12311,
    12312, 12313, 12314, 12315, 12316, 12317, 12318, 12319,
    12320, 12321, 12322, 12323, 12324, 12325, 12326, 12327,
    12328, 12329, 12330, 12331, 12332, 12333, 12334, 12335,
    12336, 12337, 12338, 12339, 12340, 12341, 12342, 12343,
    12344, 12345, 12346, 12347, 12348, 12349, 12350, 12352,
    12353, 12354, 12355, 12356, 12357, 12358, 12359, 12360,
    12361, 12362, 12363, 12364, 12365, 12366, 12367, 12368,
    12369, 12370, 12371, 12372, 12373, 12374, 12375, 12376,
    12377, 12378, 12379, 12380, 12381, 12382, 12383, 12384,
    12385, 12386, 12387, 12388, 12389, 12390, 12391, 12392,
    12393, 12394, 12395, 12396, 12397, 12398, 12399, 12400,
    12401, 12402, 12403, 12404, 12405, 12406, 12407, 12409,
    12410, 12411, 12412, 12413, 12414, 12415, 12416, 12417,
    12418, 12419, 12420, 12421, 12422, 12423, 12424, 12425,
    12426, 12427, 12428, 12429, 12430, 12431, 12432, 12433,
    12434, 12435, 12436, 12437, 12438, 12439, 12440, 12441,
    12442, 12443, 12444, 12445, 12446, 12447, 12448, 12449,
    12450, 12451, 12452, 12453, 12454, 12455, 12456, 12457,
    12458, 12459, 12460, 12461, 12462, 12464, 12465, 12466,
    12467, 12468, 12469, 12470, 12471, 12472, 12473, 12474,
    12475, 12476, 12477, 12478, 12479, 12480, 12481, 12482,
    12483, 12484, 12485, 12486, 12487, 12488, 12489, 12490,
    12491, 12492, 12493, 12494, 12495, 12496, 12497, 12498,
    12499, 12500, 12501, 12502, 12503, 12504, 12505, 12506,
    12507, 12508, 12509, 12510, 12511, 12512, 12513, 12514,
    12515, 12516, 12517, 12518, 12520, 12521, 12522, 12523,
    12524, 12525, 12526, 12527, 12528, 12529, 12530, 12531,
    12532, 12533, 12534, 12535, 12536, 12537, 12538, 12539,
    12540, 12541, 12542, 12543, 12544, 12545, 12546, 12547,
    12548, 12549, 12550, 12551, 12552, 12553, 12554, 12555,
    12556, 12557, 12558, 12559, 12560, 12561, 12562, 12563,
    12564, 12565, 12566, 12567, 12568, 12569, 12570, 12571,
    12572, 12574, 12575, 12576, 12577, 12578, 12579, 12580,
    12581, 12582, 12583, 12584, 12585, 12586, 12587, 12588,
    12589, 12590, 12591, 12592, 12593, 12594, 12595, 12596,
    12597, 12598, 12599, 12600, 12601, 12602, 12603, 12604,
    12605, 12606, 12607, 12608, 12609, 12610, 12611, 12612,
    12613, 12614, 12615, 12616, 12617, 12618, 12619, 12620,
    12621, 12622, 12623, 12624, 12625, 12626, 12627, 12629,
    12630, 12631, 12632, 12633, 12634, 12635, 12636, 12637,
    12638, 12639, 12640, 12641, 12642, 12643, 12644, 12645,
    12646, 12647, 12648, 12649, 12650, 12651, 12652, 12653,
    12654, 12655, 12656, 12657, 12658, 12659, 12660, 12661,
    12662, 12663, 12664, 12665, 12666, 12667, 12668, 12669,
    12670, 12671, 12672, 12673, 12674, 12675, 12676, 12677,
    12678, 12679, 12680, 12682, 12683, 12684, 12685, 12686,
    12687, 12688, 12689, 12690, 12691, 12692, 12693, 12694,
    12695, 12696, 12697, 12698, 12699, 12700, 12701, 12702,
    12703, 12704, 12705, 12706, 12707, 12708, 12709, 12710,
    12711, 12712, 12713, 12714, 12715, 12716, 12717, 12718,
    12719, 12720, 12721, 12722, 12723, 12724, 12725, 12726,
    12727, 12728, 12729, 12730, 12731, 12732, 12733, 12734,
    12736, 12737, 12738, 12739, 12740, 12741, 12742, 12743,
    12744, 12745, 12746, 12747, 12748, 12749, 12750, 12751,
    12752, 12753, 12754, 12755, 12756, 12757, 12758, 12759,
    12760, 12761, 12762, 12763, 12764, 12765, 12766, 12767,
    12768, 12769, 12770, 12771, 12772, 12773, 12774, 12775,
    12776, 12777, 12778, 12779, 12780, 12781, 12782, 12783,
    12784, 12785, 12786, 12787, 12789, 12790, 12791, 12792,
    12793, 12794, 12795, 12796, 12797, 12798, 12799, 12800,
    12801, 12802, 12803, 12804, 12805, 12806, 12807, 12808,
    12809, 12810, 12811, 12812, 12813, 12814, 12815, 12816,
    12817, 12818, 12819, 12820, 12821, 12822, 12823, 12824,
    12825, 12826, 12827, 12828, 12829, 12830, 12831, 12832,
    12833, 12834, 12835, 12836, 12837, 12838, 12839, 12841,
    12842, 12843, 12844, 12845, 12846, 12847, 12848, 12849,
    12850, 12851, 12852, 12853, 12854, 12855, 12856, 12857,
    12858, 12859, 12860, 12861, 12862, 12863, 12864, 12865,
    12866, 12867, 12868, 12869, 12870, 12871, 12872, 12873,
    12874, 12875, 12876, 12877, 12878, 12879, 12880, 12881,
    12882, 12883, 12884, 12885, 12886, 12887, 12888, 12889,
    12890, 12891, 12893, 12894, 12895, 12896, 12897, 12898,
    12899, 12900, 12901, 12902, 12903, 12904, 12905, 12906,
    12907, 12908, 12909, 12910, 12911, 12912, 12913, 12914,
    12915, 12916, 12917, 12918, 12919, 12920, 12921, 12922,
    12923, 12924, 12925, 12926, 12927, 12928, 12929, 12930,
    12931, 12932, 12933, 12934, 12935, 12936, 12937, 12938,
    12939, 12940, 12941, 12942, 12943, 12945, 12946, 12947,
    12948, 12949, 12950, 12951, 12952, 12953, 12954, 12955,
    12956, 12957, 12958, 12959, 12960, 12961, 12962, 12963,
    12964, 12965, 12966, 12967, 12968, 12969, 12970, 12971,
    12972, 12973, 12974, 12975, 12976, 12977, 12978, 12979,
    12980, 12981, 12982, 12983, 12984, 12985, 12986, 12987,
    12988, 12989, 12990, 12991, 12992, 12993, 12994, 12996,
    12997, 12998, 12999, 13000, 13001, 13002, 13003, 13004,
    13005, 13006, 13007, 13008, 13009, 13010, 13011, 13012,
    13013, 13014, 13015, 13016, 13017, 13018, 13019, 13020,
    13021, 13022, 13023, 13024, 13025, 13026, 13027, 13028,
    13029, 13030, 13031, 13032, 13033, 13034, 13035, 13036,
    13037, 13038, 13039, 13040, 13041, 13042, 13043, 13044,
    13045, 13047, 13048, 13049, 13050, 13051, 13052, 13053,
    13054, 13055, 13056, 13057, 13058, 13059, 13060, 13061,
    13062, 13063, 13064, 13065, 13066, 13067, 13068, 13069,
    13070, 13071, 13072, 13073, 13074, 13075, 13076, 13077,
    13078, 13079, 13080, 13081, 13082, 13083, 13084, 13085,
    13086, 13087, 13088, 13089, 13090, 13091, 13092, 13093,
    13094, 13095, 13097, 13098, 13099, 13100, 13101, 13102,
    13103, 13104, 13105, 13106, 13107, 13108, 13109, 13110,
    13111, 13112, 13113, 13114, 13115, 13116, 13117, 13118,
    13119, 13120, 13121, 13122, 13123, 13124, 13125, 13126,
    13127, 13128, 13129, 13130, 13131, 13132, 13133, 13134,
    13135, 13136, 13137, 13138, 13139, 13140, 13141, 13142,
    13143, 13144, 13145, 13147, 13148, 13149, 13150, 13151,
    13152, 13153, 13154, 13155, 13156, 13157, 13158, 13159,
    13160, 13161, 13162, 13163, 13164, 13165, 13166, 13167,
    13168, 13169, 13170, 13171, 13172, 13173, 13174, 13175,
    13176, 13177, 13178, 13179, 13180, 13181, 13182, 13183,
    13184, 13185, 13186, 13187, 13188, 13189, 13190, 13191,
    13192, 13193, 13194, 13195, 13197, 13198, 13199, 13200,
    13201, 13202, 13203, 13204, 13205, 13206, 13207, 13208,
    13209, 13210, 13211, 13212, 13213, 13214, 13215, 13216,
    13217, 13218, 13219, 13220, 13221, 13222, 13223, 13224,
    13225, 13226, 13227, 13228, 13229, 13230, 13231, 13232,
    13233, 13234, 13235, 13236, 13237, 13238, 13239, 13240,
    13241, 13242, 13243, 13244, 13246, 13247, 13248, 13249,
    13250, 13251, 13252, 13253, 13254, 13255, 13256, 13257,
    13258, 13259, 13260, 13261, 13262, 13263, 13264, 13265,
    13266, 13267, 13268, 13269, 13270, 13271, 13272, 13273,
    13274, 13275, 13276, 13277, 13278, 13279, 13280, 13281,
    13282, 13283, 13284, 13285, 13286, 13287, 13288, 13289,
    13290, 13291, 13292, 13293, 13295, 13296, 13297, 13298,
    13299, 13300, 13301, 13302, 13303, 13304, 13305, 13306,
    13307, 13308, 13309, 13310, 13311, 13312, 13313, 13314,
    13315, 13316, 13317, 13318, 13319, 13320, 13321, 13322,
    13323, 13324, 13325, 13326, 13327, 13328, 13329, 13330,
    13331, 13332, 13333, 13334, 13335, 13336, 13337, 13338,
    13339, 13340, 13341, 13342, 13344, 13345, 13346, 13347,
    13348, 13349, 13350, 13351, 13352, 13353, 13354, 13355,
    13356, 13357, 13358, 13359, 13360, 13361, 13362, 13363,
    13364, 13365, 13366, 13367, 13368, 13369, 13370, 13371,
    13372, 13373, 13374, 13375, 13376, 13377, 13378, 13379,
    13380, 13381, 13382, 13383, 13384, 13385, 13386, 13387,
    13388, 13389, 13390, 13392, 13393, 13394, 13395, 13396,
    13397, 13398, 13399, 13400, 13401, 13402, 13403, 13404,
    13405, 13406, 13407, 13408, 13409, 13410, 13411, 13412,
    13413, 13414, 13415, 13416, 13417, 13418, 13419, 13420,
    13421, 13422, 13423, 13424, 13425, 13426, 13427, 13428,
    13429, 13430, 13431, 13432, 13433, 13434, 13435, 13436,
    13437, 13438, 13440, 13441, 13442, 13443, 13444, 13445,
    13446, 13447, 13448, 13449, 13450, 13451, 13452, 13453,
    13454, 13455, 13456, 13457, 13458, 13459, 13460, 13461,
    13462, 13463, 13464, 13465, 13466, 13467, 13468, 13469,
    13470, 13471, 13472, 13473, 13474, 13475, 13476, 13477,
    13478, 13479, 13480, 13481, 13482, 13483, 13484, 13485,
    13486, 13488, 13489, 13490, 13491, 13492, 13493, 13494,
    13495, 13496, 13497, 13498, 13499, 13500, 13501, 13502,
    13503, 13504, 13505, 13506, 13507, 13508, 13509, 13510,
    13511, 13512, 13513, 13514, 13515, 13516, 13517, 13518,
    13519, 13520, 13521, 13522, 13523, 13524, 13525, 13526,
    13527, 13528, 13529, 13530, 13531, 13532, 13533, 13535,
    13536, 13537, 13538, 13539, 13540, 13541, 13542, 13543,
    13544, 13545, 13546, 13547, 13548, 13549, 13550, 13551,
    13552, 13553, 13554, 13555, 13556, 13557, 13558, 13559,
    13560, 13561, 13562, 13563, 13564, 13565, 13566, 13567,
    13568, 13569, 13570, 13571, 13572, 13573, 13574, 13575,
    13576, 13577, 13578, 13579, 13580, 13582, 13583, 13584,
    13585, 13586, 13587, 13588, 13589, 13590, 13591, 13592,
    13593, 13594, 13595, 13596, 13597, 13598, 13599, 13600,
    13601, 13602, 13603, 13604, 13605, 13606, 13607, 13608,
    13609, 13610, 13611, 13612, 13613, 13614, 13615, 13616,
    13617, 13618, 13619, 13620, 13621, 13622, 13623, 13624,
    13625, 13626, 13628, 13629, 13630, 13631, 13632, 13633,
    13634, 13635, 13636, 13637, 13638, 13639, 13640, 13641,
    13642, 13643, 13644, 13645, 13646, 13647, 13648, 13649,
    13650, 13651, 13652, 13653, 13654, 13655, 13656, 13657,
    13658, 13659, 13660, 13661, 13662, 13663, 13664, 13665,
    13666, 13667, 13668, 13669, 13670, 13671, 13672, 13673,
    13675, 13676, 13677, 13678, 13679, 13680, 13681, 13682,
    13683, 13684, 13685, 13686, 13687, 13688, 13689, 13690,
    13691, 13692, 13693, 13694, 13695, 13696, 13697, 13698,
    13699, 13700, 13701, 13702, 13703, 13704, 13705, 13706,
    13707, 13708, 13709, 13710, 13711, 13712, 13713, 13714,
    13715, 13716, 13717, 13718, 13719, 13721, 13722, 13723,
    13724, 13725, 13726, 13727, 13728, 13729, 13730, 13731,
    13732, 13733, 13734, 13735, 13736, 13737, 13738, 13739,
    13740, 13741, 13742, 13743, 13744, 13745, 13746, 13747,
    13748, 13749, 13750, 13751, 13752, 13753, 13754, 13755,
    13756, 13757, 13758, 13759, 13760, 13761, 13762, 13763,
    13764, 13766, 13767, 13768, 13769, 13770, 13771, 13772,
    13773, 13774, 13775, 13776, 13777, 13778, 13779, 13780,
    13781, 13782, 13783, 13784, 13785, 13786, 13787, 13788,
    13789, 13790, 13791, 13792, 13793, 13794, 13795, 13796,
    13797, 13798, 13799, 13800, 13801, 13802, 13803, 13804,
    13805, 13806, 13807, 13808, 13809, 13810, 13812, 13813,
    13814, 13815, 13816, 13817, 13818, 13819, 13820, 13821,
    13822, 13823, 13824, 13825, 13826, 13827, 13828, 13829,
    13830, 13831, 13832, 13833, 13834, 13835, 13836, 13837,
    13838, 13839, 13840, 13841, 13842, 13843, 13844, 13845,
    13846, 13847, 13848, 13849, 13850, 13851, 13852, 13853,
    13854, 13855, 13857, 13858, 13859, 13860, 13861, 13862,
    13863, 13864, 13865, 13866, 13867, 13868, 13869, 13870,
    13871, 13872, 13873, 13874, 13875, 13876, 13877, 13878,
    13879, 13880, 13881, 13882, 13883, 13884, 13885, 13886,
    13887, 13888, 13889, 13890, 13891, 13892, 13893, 13894,
    13895, 13896, 13897, 13898, 13899, 13901, 13902, 13903,
    13904, 13905, 13906, 13907, 13908, 13909, 13910, 13911,
    13912, 13913, 13914, 13915, 13916, 13917, 13918, 13919,
    13920, 13921, 13922, 13923, 13924, 13925, 13926, 13927,
    13928, 13929, 13930, 13931, 13932, 13933, 13934, 13935,
    13936, 13937, 13938, 13939, 13940, 13941, 13942, 13943,
    13944, 13946, 13947, 13948, 13949, 13950, 13951, 13952,
    13953, 13954, 13955, 13956, 13957, 13958, 13959, 13960,
    13961, 13962, 13963, 13964, 13965, 13966, 13967, 13968,
    13969, 13970, 13971, 13972, 13973, 13974, 13975, 13976,
    13977, 13978, 13979, 13980, 13981, 13982, 13983, 13984,
    13985, 13986, 13987, 13988, 13990, 13991, 13992, 13993,
    13994, 13995, 13996, 13997, 13998, 13999, 14000, 14001,
    14002, 14003, 14004, 14005, 14006, 14007, 14008, 14009,
    14010, 14011, 14012, 14013, 14014, 14015, 14016, 14017,
    14018, 14019, 14020, 14021, 14022, 14023, 14024, 14025,
    14026, 14027, 14028, 14029, 14030, 14031, 14032, 14034,
    14035, 14036, 14037, 14038, 14039, 14040, 14041, 14042,
    14043, 14044, 14045, 14046, 14047, 14048, 14049, 14050,
    14051, 14052, 14053, 14054, 14055, 14056, 14057, 14058,
    14059, 14060, 14061, 14062, 14063, 14064, 14065, 14066,
    14067, 14068, 14069, 14070, 14071, 14072, 14073, 14074,
    14075, 14076, 14078, 14079, 14080, 14081, 14082, 14083,
    14084, 14085, 14086, 14087, 14088, 14089, 14090, 14091,
    14092, 14093, 14094, 14095, 14096, 14097, 14098, 14099,
    14100, 14101, 14102, 14103, 14104, 14105, 14106, 14107,
    14108, 14109, 14110, 14111, 14112, 14113, 14114, 14115,
    14116, 14117, 14118, 14119, 14121, 14122, 14123, 14124,
    14125, 14126, 14127, 14128, 14129, 14130, 14131, 14132,
    14133, 14134, 14135, 14136, 14137, 14138, 14139, 14140,
    14141, 14142, 14143, 14144, 14145, 14146, 14147, 14148,
    14149, 14150, 14151, 14152, 14153, 14154, 14155, 14156,
    14157, 14158, 14159, 14160, 14161, 14162, 14164, 14165,
    14166, 14167, 14168, 14169, 14170, 14171, 14172, 14173,
    14174, 14175, 14176, 14177, 14178, 14179, 14180, 14181,
    14182, 14183, 14184, 14185, 14186, 14187, 14188, 14189,
    14190, 14191, 14192, 14193, 14194, 14195, 14196, 14197,
    14198, 14199, 14200, 14201, 14202, 14203, 14204, 14205,
    14207, 14208, 14209, 14210, 14211, 14212, 14213, 14214,
    14215, 14216, 14217, 14218, 14219, 14220, 14221, 14222,
    14223, 14224, 14225, 14226, 14227, 14228, 14229, 14230,
    14231, 14232, 14233, 14234, 14235, 14236, 14237, 14238,
    14239, 14240, 14241, 14242, 14243, 14244, 14245, 14246,
    14247, 14248, 14250, 14251, 14252, 14253, 14254, 14255,
    14256, 14257, 14258, 14259, 14260, 14261, 14262, 14263,
    14264, 14265, 14266, 14267, 14268, 14269, 14270, 14271,
    14272, 14273, 14274, 14275, 14276, 14277, 14278, 14279,
    14280, 14281, 14282, 14283, 14284, 14285, 14286, 14287,
    14288, 14289, 14290, 14292, 14293, 14294, 14295, 14296,
    14297, 14298, 14299, 14300, 14301, 14302, 14303, 14304,
    14305, 14306, 14307, 14308, 14309, 14310, 14311, 14312,
    14313, 14314, 14315, 14316, 14317, 14318, 14319, 14320,
    14321, 14322, 14323, 14324, 14325, 14326, 14327, 14328,
    14329, 14330, 14331, 14332, 14334, 14335, 14336, 14337,
    14338, 14339, 14340, 14341, 14342, 14343, 14344, 14345,
    14346, 14347, 14348, 14349, 14350, 14351, 14352, 14353,
    14354, 14355, 14356, 14357, 14358, 14359, 14360, 14361,
    14362, 14363, 14364, 14365, 14366, 14367, 14368, 14369,
    14370, 14371, 14372, 14373, 14374, 14376, 14377, 14378,
    14379, 14380, 14381, 14382, 14383, 14384, 14385, 14386,
    14387, 14388, 14389, 14390, 14391, 14392, 14393, 14394,
    14395, 14396, 14397, 14398, 14399, 14400, 14401, 14402,
    14403, 14404, 14405, 14406, 14407, 14408, 14409, 14410,
    14411, 14412, 14413, 14414, 14415, 14417, 14418, 14419,
    14420, 14421, 14422, 14423, 14424, 14425, 14426, 14427,
    14428, 14429, 14430, 14431, 14432, 14433, 14434, 14435,
    14436, 14437, 14438, 14439, 14440, 14441, 14442, 14443,
    14444, 14445, 14446, 14447, 14448, 14449, 14450, 14451,
    14452, 14453, 14454, 14455, 14456, 14457, 14459, 14460,
    14461, 14462, 14463, 14464, 14465, 14466, 14467, 14468,
    14469, 14470, 14471, 14472, 14473, 14474, 14475, 14476,
    14477, 14478, 14479, 14480, 14481, 14482, 14483, 14484,
    14485, 14486, 14487, 14488, 14489, 14490, 14491, 14492,
    14493, 14494, 14495, 14496, 14497, 14498, 14500, 14501,
    14502, 14503, 14504, 14505, 14506, 14507, 14508, 14509,
    14510, 14511, 14512, 14513, 14514, 14515, 14516, 14517,
    14518, 14519, 14520, 14521, 14522, 14523, 14524, 14525,
    14526, 14527, 14528, 14529, 14530, 14531, 14532, 14533,
    14534, 14535, 14536, 14537, 14538, 14539, 14541, 14542,
    14543, 14544, 14545, 14546, 14547, 14548, 14549, 14550,
    14551, 14552, 14553, 14554, 14555, 14556, 14557, 14558,
    14559, 14560, 14561, 14562, 14563, 14564, 14565, 14566,
    14567, 14568, 14569, 14570, 14571, 14572, 14573, 14574,
    14575, 14576, 14577, 14578, 14579, 14580, 14582, 14583,
    14584, 14585, 14586, 14587, 14588, 14589, 14590, 14591,
    14592, 14593, 14594, 14595, 14596, 14597, 14598, 14599,
    14600, 14601, 14602, 14603, 14604, 14605, 14606, 14607,
    14608, 14609, 14610, 14611, 14612, 14613, 14614, 14615,
    14616, 14617, 14618, 14619, 14620, 14622, 14623, 14624,
    14625, 14626, 14627, 14628, 14629, 14630, 14631, 14632,
    14633, 14634, 14635, 14636, 14637, 14638, 14639, 14640,
    14641, 14642, 14643, 14644, 14645, 14646, 14647, 14648,
    14649, 14650, 14651, 14652, 14653, 14654, 14655, 14656,
    14657, 14658, 14659, 14660, 14662, 14663, 14664, 14665,
    14666, 14667, 14668, 14669, 14670, 14671, 14672, 14673,
    14674, 14675, 14676, 14677, 14678, 14679, 14680, 14681,
    14682, 14683, 14684, 14685, 14686, 14687, 14688, 14689,
    14690, 14691, 14692, 14693, 14694, 14695, 14696, 14697,
    14698, 14699, 14700, 14702, 14703, 14704, 14705, 14706,
    14707, 14708, 14709, 14710, 14711, 14712, 14713, 14714,
    14715, 14716, 14717, 14718, 14719, 14720, 14721, 14722,
    14723, 14724, 14725, 14726, 14727, 14728, 14729, 14730,
    14731, 14732, 14733, 14734, 14735, 14736, 14737, 14738,
    14739, 14740, 14742, 14743, 14744, 14745, 14746, 14747,
    14748, 14749, 14750, 14751, 14752, 14753, 14754, 14755,
    14756, 14757, 14758, 14759, 14760, 14761, 14762, 14763,
    14764, 14765, 14766, 14767, 14768, 14769, 14770, 14771,
    14772, 14773, 14774, 14775, 14776, 14777, 14778, 14779,
    14780, 14782, 14783, 14784, 14785, 14786, 14787, 14788,
    14789, 14790, 14791, 14792, 14793, 14794, 14795, 14796,
    14797, 14798, 14799, 14800, 14801, 14802, 14803, 14804,
    14805, 14806, 14807, 14808, 14809, 14810, 14811, 14812,
    14813, 14814, 14815, 14816, 14817, 14818, 14819, 14821,
    14822, 14823, 14824, 14825, 14826, 14827, 14828, 14829,
    14830, 14831, 14832, 14833, 14834, 14835, 14836, 14837,
    14838, 14839, 14840, 14841, 14842, 14843, 14844, 14845,
    14846, 14847, 14848, 14849, 14850, 14851, 14852, 14853,
    14854, 14855, 14856, 14857, 14858, 14860, 14861, 14862,
    14863, 14864, 14865, 14866, 14867, 14868, 14869, 14870,
    14871, 14872, 14873, 14874, 14875, 14876, 14877, 14878,
    14879, 14880, 14881, 14882, 14883, 14884, 14885, 14886,
    14887, 14888, 14889, 14890, 14891, 14892, 14893, 14894,
    14895, 14896, 14897, 14899, 14900, 14901, 14902, 14903,
    14904, 14905, 14906, 14907, 14908, 14909, 14910, 14911,
    14912, 14913, 14914, 14915, 14916, 14917, 14918, 14919,
    14920, 14921, 14922, 14923, 14924, 14925, 14926, 14927,
    14928, 14929, 14930, 14931, 14932, 14933, 14934, 14935,
    14936, 14938, 14939, 14940, 14941, 14942, 14943, 14944,
    14945, 14946, 14947, 14948, 14949, 14950, 14951, 14952,
    14953, 14954, 14955, 14956, 14957, 14958, 14959, 14960,
    14961, 14962, 14963, 14964, 14965, 14966, 14967, 14968,
    14969, 14970, 14971, 14972, 14973, 14974, 14975, 14977,
    14978, 14979, 14980, 14981, 14982, 14983, 14984, 14985,
    14986, 14987, 14988, 14989, 14990, 14991, 14992, 14993,
    14994, 14995, 14996, 14997, 14998, 14999, 15000, 15001,
    15002, 15003, 15004, 15005, 15006, 15007, 15008, 15009,
    15010, 15011, 15012, 15013, 15015, 15016, 15017, 15018,
    15019, 15020, 15021, 15022, 15023, 15024, 15025, 15026,
    15027, 15028, 15029, 15030, 15031, 15032, 15033, 15034,
    15035, 15036, 15037, 15038, 15039, 15040, 15041, 15042,
    15043, 15044, 15045, 15046, 15047, 15048, 15049, 15050,
    15051, 15053, 15054, 15055, 15056, 15057, 15058, 15059,
    15060, 15061, 15062, 15063, 15064, 15065, 15066, 15067,
    15068, 15069, 15070, 15071, 15072, 15073, 15074, 15075,
    15076, 15077, 15078, 15079, 15080, 15081, 15082, 15083,
    15084, 15085, 15086, 15087, 15088, 15089, 15091, 15092,
    15093, 15094, 15095, 15096, 15097, 15098, 15099, 15100,
    15101, 15102, 15103, 15104, 15105, 15106, 15107, 15108,
    15109, 15110, 15111, 15112, 15113, 15114, 15115, 15116,
    15117, 15118, 15119, 15120, 15121, 15122, 15123, 15124,
    15125, 15126, 15127, 15129, 15130, 15131, 15132, 15133,
    15134, 15135, 15136, 15137, 15138, 15139, 15140, 15141,
    15142, 15143, 15144, 15145, 15146, 15147, 15148, 15149,
    15150, 15151, 15152, 15153, 15154, 15155, 15156, 15157,
    15158, 15159, 15160, 15161, 15162, 15163, 15164, 15166,
    15167, 15168, 15169, 15170, 15171, 15172, 15173, 15174,
    15175, 15176, 15177, 15178, 15179, 15180, 15181, 15182,
    15183, 15184, 15185, 15186, 15187, 15188, 15189, 15190,
    15191, 15192, 15193, 15194, 15195, 15196, 15197, 15198,
    15199, 15200, 15201, 15202, 15204, 15205, 15206, 15207,
    15208, 15209, 15210, 15211, 15212, 15213, 15214, 15215,
    15216, 15217, 15218, 15219, 15220, 15221, 15222, 15223,
    15224, 15225, 15226, 15227, 15228, 15229, 15230, 15231,
    15232, 15233, 15234, 15235, 15236, 15237, 15238, 15239,
    15241, 15242, 15243, 15244, 15245, 15246, 15247, 15248,
    15249, 15250, 15251, 15252, 15253, 15254, 15255, 15256,
    15257, 15258, 15259, 15260, 15261, 15262, 15263, 15264,
    15265, 15266, 15267, 15268, 15269, 15270, 15271, 15272,
    15273, 15274, 15275, 15276, 15278, 15279, 15280, 15281,
    15282, 15283, 15284, 15285, 15286, 15287, 15288, 15289,
    15290, 15291, 15292, 15293, 15294, 15295, 15296, 15297,
    15298, 15299, 15300, 15301, 15302, 15303, 15304, 15305,
    15306, 15307, 15308, 15309, 15310, 15311, 15312, 15313,
    15315, 15316, 15317, 15318, 15319, 15320, 15321, 15322,
    15323, 15324, 15325, 15326, 15327, 15328, 15329, 15330,
    15331, 15332, 15333, 15334, 15335, 15336, 15337, 15338,
    15339, 15340, 15341, 15342, 15343, 15344, 15345, 15346,
    15347, 15348, 15349, 15350, 15352, 15353, 15354, 15355,
    15356, 15357, 15358, 15359, 15360, 15361, 15362, 15363,
    15364, 15365, 15366, 15367, 15368, 15369, 15370, 15371,
    15372, 15373, 15374, 15375, 15376, 15377, 15378, 15379,
    15380, 15381, 15382, 15383, 15384, 15385, 15386, 15388,
    15389, 15390, 15391, 15392, 15393, 15394, 15395, 15396,
    15397, 15398, 15399, 15400, 15401, 15402, 15403, 15404,
    15405, 15406, 15407, 15408, 15409, 15410, 15411, 15412,
    15413, 15414, 15415, 15416, 15417, 15418, 15419, 15420,
    15421, 15422, 15423, 15425, 15426, 15427, 15428, 15429,
    15430, 15431, 15432, 15433, 15434, 15435, 15436, 15437,
    15438, 15439, 15440, 15441, 15442, 15443, 15444, 15445,
    15446, 15447, 15448, 15449, 15450, 15451, 15452, 15453,
    15454, 15455, 15456, 15457, 15458, 15459, 15461, 15462,
    15463, 15464, 15465, 15466, 15467, 15468, 15469, 15470,
    15471, 15472, 15473, 15474, 15475, 15476, 15477, 15478,
    15479, 15480, 15481, 15482, 15483, 15484, 15485, 15486,
    15487, 15488, 15489, 15490, 15491, 15492, 15493, 15494,
    15495, 15497, 15498, 15499, 15500, 15501, 15502, 15503,
    15504, 15505, 15506, 15507, 15508, 15509, 15510, 15511,
    15512, 15513, 15514, 15515, 15516, 15517, 15518, 15519,
    15520, 15521, 15522, 15523, 15524, 15525, 15526, 15527,
    15528, 15529, 15530, 15531, 15533, 15534, 15535, 15536,
    15537, 15538, 15539, 15540, 15541, 15542, 15543, 15544,
    15545, 15546, 15547, 15548, 15549, 15550, 15551, 15552,
    15553, 15554, 15555, 15556, 15557, 15558, 15559, 15560,
    15561, 15562, 15563, 15564, 15565, 15566, 15568, 15569,
    15570, 15571, 15572, 15573, 15574, 15575, 15576, 15577,
    15578, 15579, 15580, 15581, 15582, 15583, 15584, 15585,
    15586, 15587, 15588, 15589, 15590, 15591, 15592, 15593,
    15594, 15595, 15596, 15597, 15598, 15599, 15600, 15601,
    15602, 15604, 15605, 15606, 15607, 15608, 15609, 15610,
    15611, 15612, 15613, 15614, 15615, 15616, 15617, 15618,
    15619, 15620, 15621, 15622, 15623, 15624, 15625, 15626,
    15627, 15628, 15629, 15630, 15631, 15632, 15633, 15634,
    15635, 15636, 15637, 15639, 15640, 15641, 15642, 15643,
    15644, 15645, 15646, 15647, 15648, 15649, 15650, 15651,
    15652, 15653, 15654, 15655, 15656, 15657, 15658, 15659,
    15660, 15661, 15662, 15663, 15664, 15665, 15666, 15667,
    15668, 15669, 15670, 15671, 15672, 15673, 15675, 15676,
    15677, 15678, 15679, 15680, 15681, 15682, 15683, 15684,
    15685, 15686, 15687, 15688, 15689, 15690, 15691, 15692,
    15693, 15694, 15695, 15696, 15697, 15698, 15699, 15700,
    15701, 15702, 15703, 15704, 15705, 15706, 15707, 15708,
    15710, 15711, 15712, 15713, 15714, 15715, 15716, 15717,
    15718, 15719, 15720, 15721, 15722, 15723, 15724, 15725,
    15726, 15727, 15728, 15729, 15730, 15731, 15732, 15733,
    15734, 15735, 15736, 15737, 15738, 15739, 15740, 15741,
    15742, 15744, 15745, 15746, 15747, 15748, 15749, 15750,
    15751, 15752, 15753, 15754, 15755, 15756, 15757, 15758,
    15759, 15760, 15761, 15762, 15763, 15764, 15765, 15766,
    15767, 15768, 15769, 15770, 15771, 15772, 15773, 15774,
    15775, 15776, 15777, 15779, 15780, 15781, 15782, 15783,
    15784, 15785, 15786, 15787, 15788, 15789, 15790, 15791,
    15792, 15793, 15794, 15795, 15796, 15797, 15798, 15799,
    15800, 15801, 15802, 15803, 15804, 15805, 15806, 15807,
    15808, 15809, 15810, 15811, 15812, 15814, 15815, 15816,
    15817, 15818, 15819, 15820, 15821, 15822, 15823, 15824,
    15825, 15826, 15827, 15828, 15829, 15830, 15831, 15832,
    15833, 15834, 15835, 15836, 15837, 15838, 15839, 15840,
    15841, 15842, 15843, 15844, 15845, 15846, 15848, 15849,
    15850, 15851, 15852, 15853, 15854, 15855, 15856, 15857,
    15858, 15859, 15860, 15861, 15862, 15863, 15864, 15865,
    15866, 15867, 15868, 15869, 15870, 15871, 15872, 15873,
    15874, 15875, 15876, 15877, 15878, 15879, 15880, 15881,
    15883, 15884, 15885, 15886, 15887, 15888, 15889, 15890,
    15891, 15892, 15893, 15894, 15895, 15896, 15897, 15898,
    15899, 15900, 15901, 15902, 15903, 15904, 15905, 15906,
    15907, 15908, 15909, 15910, 15911, 15912, 15913, 15914,
    15915, 15917, 15918, 15919, 15920, 15921, 15922, 15923,
    15924, 15925, 15926, 15927, 15928, 15929, 15930, 15931,
    15932, 15933, 15934, 15935, 15936, 15937, 15938, 15939,
    15940, 15941, 15942, 15943, 15944, 15945, 15946, 15947,
    15948, 15949, 15951, 15952, 15953, 15954, 15955, 15956,
    15957, 15958, 15959, 15960, 15961, 15962, 15963, 15964,
    15965, 15966, 15967, 15968, 15969, 15970, 15971, 15972,
    15973, 15974, 15975, 15976, 15977, 15978, 15979, 15980,
    15981, 15982, 15983, 15985, 15986, 15987, 15988, 15989,
    15990, 15991, 15992, 15993, 15994, 15995, 15996, 15997,
    15998, 15999, 16000, 16001, 16002, 16003, 16004, 16005,
    16006, 16007, 16008, 16009, 16010, 16011, 16012, 16013,
    16014, 16015, 16016, 16018, 16019, 16020, 16021, 16022,
    16023, 16024, 16025, 16026, 16027, 16028, 16029, 16030,
    16031, 16032, 16033, 16034, 16035, 16036, 16037, 16038,
    16039, 16040, 16041, 16042, 16043, 16044, 16045, 16046,
    16047, 16048, 16049, 16050, 16052, 16053, 16054, 16055,
    16056, 16057, 16058, 16059, 16060, 16061, 16062, 16063,
    16064, 16065, 16066, 16067, 16068, 16069, 16070, 16071,
    16072, 16073, 16074, 16075, 16076, 16077, 16078, 16079,
    16080, 16081, 16082, 16083, 16085, 16086, 16087, 16088,
    16089, 16090, 16091, 16092, 16093, 16094, 16095, 16096,
    16097, 16098, 16099, 16100, 16101, 16102, 16103, 16104,
    16105, 16106, 16107, 16108, 16109, 16110, 16111, 16112,
    16113, 16114, 16115, 16116, 16117, 16119, 16120, 16121,
    16122, 16123, 16124, 16125, 16126, 16127, 16128, 16129,
    16130, 16131, 16132, 16133, 16134, 16135, 16136, 16137,
    16138, 16139, 16140, 16141, 16142, 16143, 16144, 16145,
    16146, 16147, 16148, 16149, 16150, 16152, 16153, 16154,
    16155, 16156, 16157, 16158, 16159, 16160, 16161, 16162,
    16163, 16164, 16165, 16166, 16167, 16168, 16169, 16170,
    16171, 16172, 16173, 16174, 16175, 16176, 16177, 16178,
    16179, 16180, 16181, 16182, 16183, 16185, 16186, 16187,
    16188, 16189, 16190, 16191, 16192, 16193, 16194, 16195,
    16196, 16197, 16198, 16199, 16200, 16201, 16202, 16203,
    16204, 16205, 16206, 16207, 16208, 16209, 16210, 16211,
    16212, 16213, 16214, 16215, 16216, 16218, 16219, 16220,
    16221, 16222, 16223, 16224, 16225, 16226, 16227, 16228,
    16229, 16230, 16231, 16232, 16233, 16234, 16235, 16236,
    16237, 16238, 16239, 16240, 16241, 16242, 16243, 16244,
    16245, 16246, 16247, 16248, 16250, 16251, 16252, 16253,
    16254, 16255, 16256, 16257, 16258, 16259, 16260, 16261,
    16262, 16263, 16264, 16265, 16266, 16267, 16268, 16269,
    16270, 16271, 16272, 16273, 16274, 16275, 16276, 16277,
    16278, 16279, 16280, 16281, 16283, 16284, 16285, 16286,
    16287, 16288, 16289, 16290, 16291, 16292, 16293, 16294,
    16295, 16296, 16297, 16298, 16299, 16300, 16301, 16302,
    16303, 16304, 16305, 16306, 16307, 16308, 16309, 16310,
    16311, 16312, 16313, 16314, 16316, 16317, 16318, 16319,
    16320, 16321, 16322, 16323, 16324, 16325, 16326, 16327,
    16328, 16329, 16330, 16331, 16332, 16333, 16334, 16335,
    16336, 16337, 16338, 16339, 16340, 16341, 16342, 16343,
    16344, 16345, 16346, 16348, 16349, 16350, 16351, 16352,
    16353, 16354, 16355, 16356, 16357, 16358, 16359, 16360,
    16361, 16362, 16363, 16364, 16365, 16366, 16367, 16368,
    16369, 16370, 16371, 16372, 16373, 16374, 16375, 16376,
    16377, 16378, 16380, 16381, 16382, 16383, 16384, 16385,
    16386, 16387, 16388, 16389, 16390, 16391, 16392, 16393,
    16394, 16395, 16396, 16397, 16398, 16399, 16400, 16401,
    16402, 16403, 16404, 16405, 16406, 16407, 16408, 16409,
    16410, 16412, 16413, 16414, 16415, 16416, 16417, 16418,
    16419, 16420, 16421, 16422, 16423, 16424, 16425, 16426,
    16427, 16428, 16429, 16430, 16431, 16432, 16433, 16434,
    16435, 16436, 16437, 16438, 16439, 16440, 16441, 16442,
    16444, 16445, 16446, 16447, 16448, 16449, 16450, 16451,
    16452, 16453, 16454, 16455, 16456, 16457, 16458, 16459,
    16460, 16461, 16462, 16463, 16464, 16465, 16466, 16467,
    16468, 16469, 16470, 16471, 16472, 16473, 16474, 16476,
    16477, 16478, 16479, 16480, 16481, 16482, 16483, 16484,
    16485, 16486, 16487, 16488, 16489, 16490, 16491, 16492,
    16493, 16494, 16495, 16496, 16497, 16498, 16499, 16500,
    16501, 16502, 16503, 16504, 16505, 16506, 16508, 16509,
    16510, 16511, 16512, 16513, 16514, 16515, 16516, 16517,
    16518, 16519, 16520, 16521, 16522, 16523, 16524, 16525,
    16526, 16527, 16528, 16529, 16530, 16531, 16532, 16533,
    16534, 16535, 16536, 16537, 16538, 16540, 16541, 16542,
    16543, 16544, 16545, 16546, 16547, 16548, 16549, 16550,
    16551, 16552, 16553, 16554, 16555, 16556, 16557, 16558,
    16559, 16560, 16561, 16562, 16563, 16564, 16565, 16566,
    16567, 16568, 16569, 16571, 16572, 16573, 16574, 16575,
    16576, 16577, 16578, 16579, 16580, 16581, 16582, 16583,
    16584, 16585, 16586, 16587, 16588, 16589, 16590, 16591,
    16592, 16593, 16594, 16595, 16596, 16597, 16598, 16599,
    16600, 16602, 16603, 16604, 16605, 16606, 16607, 16608,
    16609, 16610, 16611, 16612, 16613, 16614, 16615, 16616,
    16617, 16618, 16619, 16620, 16621, 16622, 16623, 16624,
    16625, 16626, 16627, 16628, 16629, 16630, 16631, 16632,
    16634, 16635, 16636, 16637, 16638, 16639, 16640, 16641,
    16642, 16643, 16644, 16645, 16646, 16647, 16648, 16649,
    16650, 16651, 16652, 16653, 16654, 16655, 16656, 16657,
    16658, 16659, 16660, 16661, 16662, 16663, 16665, 16666,
    16667, 16668, 16669, 16670, 16671, 16672, 16673, 16674,
    16675, 16676, 16677, 16678, 16679, 16680, 16681, 16682,
    16683, 16684, 16685, 16686, 16687, 16688, 16689, 16690,
    16691, 16692, 16693, 16694, 16696, 16697, 16698, 16699,
    16700, 16701, 16702, 16703, 16704, 16705, 16706, 16707,
    16708, 16709, 16710, 16711, 16712, 16713, 16714, 16715,
    16716, 16717, 16718, 16719, 16720, 16721, 16722, 16723,
    16724, 16725, 16727, 16728, 16729, 16730, 16731, 16732,
    16733, 16734, 16735, 16736, 16737, 16738, 16739, 16740,
    16741, 16742, 16743, 16744, 16745, 16746, 16747, 16748,
    16749, 16750, 16751, 16752, 16753, 16754, 16755, 16756,
    16758, 16759, 16760, 16761, 16762, 16763, 16764, 16765,
    16766, 16767, 16768, 16769, 16770, 16771, 16772, 16773,
    16774, 16775, 16776, 16777, 16778, 16779, 16780, 16781,
    16782, 16783, 16784, 16785, 16786, 16788, 16789, 16790,
    16791, 16792, 16793, 16794, 16795, 16796, 16797, 16798,
    16799, 16800, 16801, 16802, 16803, 16804, 16805, 16806,
    16807, 16808, 16809, 16810, 16811, 16812, 16813, 16814,
    16815, 16816, 16817, 16819, 16820, 16821, 16822, 16823,
    16824, 16825, 16826, 16827, 16828, 16829, 16830, 16831,
    16832, 16833, 16834, 16835, 16836, 16837, 16838, 16839,
    16840, 16841, 16842, 16843, 16844, 16845, 16846, 16847,
    16849, 16850, 16851, 16852, 16853, 16854, 16855, 16856,
    16857, 16858, 16859, 16860, 16861, 16862, 16863, 16864,
    16865, 16866, 16867, 16868, 16869, 16870, 16871, 16872,
    16873, 16874, 16875, 16876, 16877, 16878, 16880, 16881,
    16882, 16883, 16884, 16885, 16886, 16887, 16888, 16889,
    16890, 16891, 16892, 16893, 16894, 16895, 16896, 16897,
    16898, 16899, 16900, 16901, 16902, 16903, 16904, 16905,
    16906, 16907, 16908, 16910, 16911, 16912, 16913, 16914,
    16915, 16916, 16917, 16918, 16919, 16920, 16921, 16922,
    16923, 16924, 16925, 16926, 16927, 16928, 16929, 16930,
    16931, 16932, 16933, 16934, 16935, 16936, 16937, 16938,
    16940, 16941, 16942, 16943, 16944, 16945, 16946, 16947,
    16948, 16949, 16950, 16951, 16952, 16953, 16954, 16955,
    16956, 16957, 16958, 16959, 16960, 16961, 16962, 16963,
    16964, 16965, 16966, 16967, 16968, 16970, 16971, 16972,
    16973, 16974, 16975, 16976, 16977, 16978, 16979, 16980,
    16981, 16982, 16983, 16984, 16985, 16986, 16987, 16988,
    16989, 16990, 16991, 16992, 16993, 16994, 16995, 16996,
    16997, 16998, 17000, 17001, 17002, 17003, 17004, 17005,
    17006, 17007, 17008, 17009, 17010, 17011, 17012, 17013,
    17014, 17015, 17016, 17017, 17018, 17019, 17020, 17021,
    17022, 17023, 17024, 17025, 17026, 17027, 17028, 17030,
    17031, 17032, 17033, 17034, 17035, 17036, 17037, 17038,
    17039, 17040, 17041, 17042, 17043, 17044, 17045, 17046,
    17047, 17048, 17049, 17050, 17051, 17052, 17053, 17054,
    17055, 17056, 17057, 17058, 17060, 17061, 17062, 17063,
    17064, 17065, 17066, 17067, 17068, 17069, 17070, 17071,
    17072, 17073, 17074, 17075, 17076, 17077, 17078, 17079,
    17080, 17081, 17082, 17083, 17084, 17085, 17086, 17087,
    17089, 17090, 17091, 17092, 17093, 17094, 17095, 17096,
    17097, 17098, 17099, 17100, 17101, 17102, 17103, 17104,
    17105, 17106, 17107, 17108, 17109, 17110, 17111, 17112,
    17113, 17114, 17115, 17116, 17117, 17119, 17120, 17121,
    17122, 17123, 17124, 17125, 17126, 17127, 17128, 17129,
    17130, 17131, 17132, 17133, 17134, 17135, 17136, 17137,
    17138, 17139, 17140, 17141, 17142, 17143, 17144, 17145,
    17146, 17148, 17149, 17150, 17151, 17152, 17153, 17154,
    17155, 17156, 17157, 17158, 17159, 17160, 17161, 17162,
    17163, 17164, 17165, 17166, 17167, 17168, 17169, 17170,
    17171, 17172, 17173, 17174, 17175, 17176, 17178, 17179,
    17180, 17181, 17182, 17183, 17184, 17185, 17186, 17187,
    17188, 17189, 17190, 17191, 17192, 17193, 17194, 17195,
    17196, 17197, 17198, 17199, 17200, 17201, 17202, 17203,
    17204, 17205, 17207, 17208, 17209, 17210, 17211, 17212,
    17213, 17214, 17215, 17216, 17217, 17218, 17219, 17220,
    17221, 17222, 17223, 17224, 17225, 17226, 17227, 17228,
    17229, 17230, 17231, 17232, 17233, 17234, 17236, 17237,
    17238, 17239, 17240, 17241, 17242, 17243, 17244, 17245,
    17246, 17247, 17248, 17249, 17250, 17251, 17252, 17253,
    17254, 17255, 17256, 17257, 17258, 17259, 17260, 17261,
    17262, 17263, 17265, 17266, 17267, 17268, 17269, 17270,
    17271, 17272, 17273, 17274, 17275, 17276, 17277, 17278,
    17279, 17280, 17281, 17282, 17283, 17284, 17285, 17286,
    17287, 17288, 17289, 17290, 17291, 17292, 17294, 17295,
    17296, 17297, 17298, 17299, 17300, 17301, 17302, 17303,
    17304, 17305, 17306, 17307, 17308, 17309, 17310, 17311,
    17312, 17313, 17314, 17315, 17316, 17317, 17318, 17319,
    17320, 17321, 17323, 17324, 17325, 17326, 17327, 17328,
    17329, 17330, 17331, 17332, 17333, 17334, 17335, 17336,
    17337, 17338, 17339, 17340, 17341, 17342, 17343, 17344,
    17345, 17346, 17347, 17348, 17349, 17350, 17352, 17353,
    17354, 17355, 17356, 17357, 17358, 17359, 17360, 17361,
    17362, 17363, 17364, 17365, 17366, 17367, 17368, 17369,
    17370, 17371, 17372, 17373, 17374, 17375, 17376, 17377,
    17378, 17380, 17381, 17382, 17383, 17384, 17385, 17386,
    17387, 17388, 17389, 17390, 17391, 17392, 17393, 17394,
    17395, 17396, 17397, 17398, 17399, 17400, 17401, 17402,
    17403, 17404, 17405, 17406, 17407, 17409, 17410, 17411,
    17412, 17413, 17414, 17415, 17416, 17417, 17418, 17419,
    17420, 17421, 17422, 17423, 17424, 17425, 17426, 17427,
    17428, 17429, 17430, 17431, 17432, 17433, 17434, 17435,
    17437, 17438, 17439, 17440, 17441, 17442, 17443, 17444,
    17445, 17446, 17447, 17448, 17449, 17450, 17451, 17452,
    17453, 17454, 17455, 17456, 17457, 17458, 17459, 17460,
    17461, 17462, 17463, 17464, 17466, 17467, 17468, 17469,
    17470, 17471, 17472, 17473, 17474, 17475, 17476, 17477,
    17478, 17479, 17480, 17481, 17482, 17483, 17484, 17485,
    17486, 17487, 17488, 17489, 17490, 17491, 17492, 17494,
    17495, 17496, 17497, 17498, 17499, 17500, 17501, 17502,
    17503, 17504, 17505, 17506, 17507, 17508, 17509, 17510,
    17511, 17512, 17513, 17514, 17515, 17516, 17517, 17518,
    17519, 17520, 17522, 17523, 17524, 17525, 17526, 17527,
    17528, 17529, 17530, 17531, 17532, 17533, 17534, 17535,
    17536, 17537, 17538, 17539, 17540, 17541, 17542, 17543,
    17544, 17545, 17546, 17547, 17548, 17550, 17551, 17552,
    17553, 17554, 17555, 17556, 17557, 17558, 17559, 17560,
    17561, 17562, 17563, 17564, 17565, 17566, 17567, 17568,
    17569, 17570, 17571, 17572, 17573, 17574, 17575, 17576,
    17578, 17579, 17580, 17581, 17582, 17583, 17584, 17585,
    17586, 17587, 17588, 17589, 17590, 17591, 17592, 17593,
    17594, 17595, 17596, 17597, 17598, 17599, 17600, 17601,
    17602, 17603, 17604, 17606, 17607, 17608, 17609, 17610,
    17611, 17612, 17613, 17614, 17615, 17616, 17617, 17618,
    17619, 17620, 17621, 17622, 17623, 17624, 17625, 17626,
    17627, 17628, 17629, 17630, 17631, 17632, 17634, 17635,
    17636, 17637, 17638, 17639, 17640, 17641, 17642, 17643,
    17644, 17645, 17646, 17647, 17648, 17649, 17650, 17651,
    17652, 17653, 17654, 17655, 17656, 17657, 17658, 17659,
    17660, 17662, 17663, 17664, 17665, 17666, 17667, 17668,
    17669, 17670, 17671, 17672, 17673, 17674, 17675, 17676,
    17677, 17678, 17679, 17680, 17681, 17682, 17683, 17684,
    17685, 17686, 17687, 17689, 17690, 17691, 17692, 17693,
    17694, 17695, 17696, 17697, 17698, 17699, 17700, 17701,
    17702, 17703, 17704, 17705, 17706, 17707, 17708, 17709,
    17710, 17711, 17712, 17713, 17714, 17715, 17717, 17718,
    17719, 17720, 17721, 17722, 17723, 17724, 17725, 17726,
    17727, 17728, 17729, 17730, 17731, 17732, 17733, 17734,
    17735, 17736, 17737, 17738, 17739, 17740, 17741, 17742,
    17743, 17745, 17746, 17747, 17748, 17749, 17750, 17751,
    17752, 17753, 17754, 17755, 17756, 17757, 17758, 17759,
    17760, 17761, 17762, 17763, 17764, 17765, 17766, 17767,
    17768, 17769, 17770, 17772, 17773, 17774, 17775, 17776,
    17777, 17778, 17779, 17780, 17781, 17782, 17783, 17784,
    17785, 17786, 17787, 17788, 17789, 17790, 17791, 17792,
    17793, 17794, 17795, 17796, 17797, 17799, 17800, 17801,
    17802, 17803, 17804, 17805, 17806, 17807, 17808, 17809,
    17810, 17811, 17812, 17813, 17814, 17815, 17816, 17817,
    17818, 17819, 17820, 17821, 17822, 17823, 17824, 17825,
    17827, 17828, 17829, 17830, 17831, 17832, 17833, 17834,
    17835, 17836, 17837, 17838, 17839, 17840, 17841, 17842,
    17843, 17844, 17845, 17846, 17847, 17848, 17849, 17850,
    17851, 17852, 17854, 17855, 17856, 17857, 17858, 17859,
    17860, 17861, 17862, 17863, 17864, 17865, 17866, 17867,
    17868, 17869, 17870, 17871, 17872, 17873, 17874, 17875,
    17876, 17877, 17878, 17879, 17881, 17882, 17883, 17884,
    17885, 17886, 17887, 17888, 17889, 17890, 17891, 17892,
    17893, 17894, 17895, 17896, 17897, 17898, 17899, 17900,
    17901, 17902, 17903, 17904, 17905, 17906, 17908, 17909,
    17910, 17911, 17912, 17913, 17914, 17915, 17916, 17917,
    17918, 17919, 17920, 17921, 17922, 17923, 17924, 17925,
    17926, 17927, 17928, 17929, 17930, 17931, 17932, 17933,
    17935, 17936, 17937, 17938, 17939, 17940, 17941, 17942,
    17943, 17944, 17945, 17946, 17947, 17948, 17949, 17950,
    17951, 17952, 17953, 17954, 17955, 17956, 17957, 17958,
    17959, 17961, 17962, 17963, 17964, 17965, 17966, 17967,
    17968, 17969, 17970, 17971, 17972, 17973, 17974, 17975,
    17976, 17977, 17978, 17979, 17980, 17981, 17982, 17983,
    17984, 17985, 17986, 17988, 17989, 17990, 17991, 17992,
    17993, 17994, 17995, 17996, 17997, 17998, 17999, 18000,
    18001, 18002, 18003, 18004, 18005, 18006, 18007, 18008,
    18009, 18010, 18011, 18012, 18013, 18015, 18016, 18017,
    18018, 18019, 18020, 18021, 18022, 18023, 18024, 18025,
    18026, 18027, 18028, 18029, 18030, 18031, 18032, 18033,
    18034, 18035, 18036, 18037, 18038, 18039, 18040, 18042,
    18043, 18044, 18045, 18046, 18047, 18048, 18049, 18050,
    18051, 18052, 18053, 18054, 18055, 18056, 18057, 18058,
    18059, 18060, 18061, 18062, 18063, 18064, 18065, 18066,
    18068, 18069, 18070, 18071, 18072, 18073, 18074, 18075,
    18076, 18077, 18078, 18079, 18080, 18081, 18082, 18083,
    18084, 18085, 18086, 18087, 18088, 18089, 18090, 18091,
    18092, 18094, 18095, 18096, 18097, 18098, 18099, 18100,
    18101, 18102, 18103, 18104, 18105, 18106, 18107, 18108,
    18109, 18110, 18111, 18112, 18113, 18114, 18115, 18116,
    18117, 18118, 18119, 18121, 18122, 18123, 18124, 18125,
    18126, 18127, 18128, 18129, 18130, 18131, 18132, 18133,
    18134, 18135, 18136, 18137, 18138, 18139, 18140, 18141,
    18142, 18143, 18144, 18145, 18147, 18148, 18149, 18150,
    18151, 18152, 18153, 18154, 18155, 18156, 18157, 18158,
    18159, 18160, 18161, 18162, 18163, 18164, 18165, 18166,
    18167, 18168, 18169, 18170, 18171, 18173, 18174, 18175,
    18176, 18177, 18178, 18179, 18180, 18181, 18182, 18183,
    18184, 18185, 18186, 18187, 18188, 18189, 18190, 18191,
    18192, 18193, 18194, 18195, 18196, 18197, 18199, 18200,
    18201, 18202, 18203, 18204, 18205, 18206, 18207, 18208,
    18209, 18210, 18211, 18212, 18213, 18214, 18215, 18216,
    18217, 18218, 18219, 18220, 18221, 18222, 18223, 18224,
    18226, 18227, 18228, 18229, 18230, 18231, 18232, 18233,
    18234, 18235, 18236, 18237, 18238, 18239, 18240, 18241,
    18242, 18243, 18244, 18245, 18246, 18247, 18248, 18249,
    18250, 18252, 18253, 18254, 18255, 18256, 18257, 18258,
    18259, 18260, 18261, 18262, 18263, 18264, 18265, 18266,
    18267, 18268, 18269, 18270, 18271, 18272, 18273, 18274,
    18275, 18277, 18278, 18279, 18280, 18281, 18282, 18283,
    18284, 18285, 18286, 18287, 18288, 18289, 18290, 18291,
    18292, 18293, 18294, 18295, 18296, 18297, 18298, 18299,
    18300, 18301, 18303, 18304, 18305, 18306, 18307, 18308,
    18309, 18310, 18311, 18312, 18313, 18314, 18315, 18316,
    18317, 18318, 18319, 18320, 18321, 18322, 18323, 18324,
    18325, 18326, 18327, 18329, 18330, 18331, 18332, 18333,
    18334, 18335, 18336, 18337, 18338, 18339, 18340, 18341,
    18342, 18343, 18344, 18345, 18346, 18347, 18348, 18349,
    18350, 18351, 18352, 18353, 18355, 18356, 18357, 18358,
    18359, 18360, 18361, 18362, 18363, 18364, 18365, 18366,
    18367, 18368, 18369, 18370, 18371, 18372, 18373, 18374,
    18375, 18376, 18377, 18378, 18380, 18381, 18382, 18383,
    18384, 18385, 18386, 18387, 18388, 18389, 18390, 18391,
    18392, 18393, 18394, 18395, 18396, 18397, 18398, 18399,
    18400, 18401, 18402, 18403, 18404, 18406, 18407, 18408,
    18409, 18410, 18411, 18412, 18413, 18414, 18415, 18416,
    18417, 18418, 18419, 18420, 18421, 18422, 18423, 18424,
    18425, 18426, 18427, 18428, 18429, 18431, 18432, 18433,
    18434, 18435, 18436, 18437, 18438, 18439, 18440, 18441,
    18442, 18443, 18444, 18445, 18446, 18447, 18448, 18449,
    18450, 18451, 18452, 18453, 18454, 18455, 18457, 18458,
    18459, 18460, 18461, 18462, 18463, 18464, 18465, 18466,
    18467, 18468, 18469, 18470, 18471, 18472, 18473, 18474,
    18475, 18476, 18477, 18478, 18479, 18480, 18482, 18483,
    18484, 18485, 18486, 18487, 18488, 18489, 18490, 18491,
    18492, 18493, 18494, 18495, 18496, 18497, 18498, 18499,
    18500, 18501, 18502, 18503, 18504, 18505, 18506, 18508,
    18509, 18510, 18511, 18512, 18513, 18514, 18515, 18516,
    18517, 18518, 18519, 18520, 18521, 18522, 18523, 18524,
    18525, 18526, 18527, 18528, 18529, 18530, 18531, 18533,
    18534, 18535, 18536, 18537, 18538, 18539, 18540, 18541,
    18542, 18543, 18544, 18545, 18546, 18547, 18548, 18549,
    18550, 18551, 18552, 18553, 18554, 18555, 18556, 18558,
    18559, 18560, 18561, 18562, 18563, 18564, 18565, 18566,
    18567, 18568, 18569, 18570, 18571, 18572, 18573, 18574,
    18575, 18576, 18577, 18578, 18579, 18580, 18581, 18583,
    18584, 18585, 18586, 18587, 18588, 18589, 18590, 18591,
    18592, 18593, 18594, 18595, 18596, 18597, 18598, 18599,
    18600, 18601, 18602, 18603, 18604, 18605, 18606, 18608,
    18609, 18610, 18611, 18612, 18613, 18614, 18615, 18616,
    18617, 18618, 18619, 18620, 18621, 18622, 18623, 18624,
    18625, 18626, 18627, 18628, 18629, 18630, 18631, 18633,
    18634, 18635, 18636, 18637, 18638, 18639, 18640, 18641,
    18642, 18643, 18644, 18645, 18646, 18647, 18648, 18649,
    18650, 18651, 18652, 18653, 18654, 18655, 18656, 18658,
    18659, 18660, 18661, 18662, 18663, 18664, 18665, 18666,
    18667, 18668, 18669, 18670, 18671, 18672, 18673, 18674,
    18675, 18676, 18677, 18678, 18679, 18680, 18681, 18683,
    18684, 18685, 18686, 18687, 18688, 18689, 18690, 18691,
    18692, 18693, 18694, 18695, 18696, 18697, 18698, 18699,
    18700, 18701, 18702, 18703, 18704, 18705, 18707, 18708,
    18709, 18710, 18711, 18712, 18713, 18714, 18715, 18716,
    18717, 18718, 18719, 18720, 18721, 18722, 18723, 18724,
    18725, 18726, 18727, 18728, 18729, 18730, 18732, 18733,
    18734, 18735, 18736, 18737, 18738, 18739, 18740, 18741,
    18742, 18743, 18744, 18745, 18746, 18747, 18748, 18749,
    18750, 18751, 18752, 18753, 18754, 18755, 18757, 18758,
    18759, 18760, 18761, 18762, 18763, 18764, 18765, 18766,
    18767, 18768, 18769, 18770, 18771, 18772, 18773, 18774,
    18775, 18776, 18777, 18778, 18779, 18781, 18782, 18783,
    18784, 18785, 18786, 18787, 18788, 18789, 18790, 18791,
    18792, 18793, 18794, 18795, 18796, 18797, 18798, 18799,
    18800, 18801, 18802, 18803, 18804, 18806, 18807, 18808,
    18809, 18810, 18811, 18812, 18813, 18814, 18815, 18816,
    18817, 18818, 18819, 18820, 18821, 18822, 18823, 18824,
    18825, 18826, 18827, 18828, 18830, 18831, 18832, 18833,
    18834, 18835, 18836, 18837, 18838, 18839, 18840, 18841,
    18842, 18843, 18844, 18845, 18846, 18847, 18848, 18849,
    18850, 18851, 18852, 18854, 18855, 18856, 18857, 18858,
    18859, 18860, 18861, 18862, 18863, 18864, 18865, 18866,
    18867, 18868, 18869, 18870, 18871, 18872, 18873, 18874,
    18875, 18876, 18877, 18879, 18880, 18881, 18882, 18883,
    18884, 18885, 18886, 18887, 18888, 18889, 18890, 18891,
    18892, 18893, 18894, 18895, 18896, 18897, 18898, 18899,
    18900, 18901, 18903, 18904, 18905, 18906, 18907, 18908,
    18909, 18910, 18911, 18912, 18913, 18914, 18915, 18916,
    18917, 18918, 18919, 18920, 18921, 18922, 18923, 18924,
    18925, 18927, 18928, 18929, 18930, 18931, 18932, 18933,
    18934, 18935, 18936, 18937, 18938, 18939, 18940, 18941,
    18942, 18943, 18944, 18945, 18946, 18947, 18948, 18949,
    18951, 18952, 18953, 18954, 18955, 18956, 18957, 18958,
    18959, 18960, 18961, 18962, 18963, 18964, 18965, 18966,
    18967, 18968, 18969, 18970, 18971, 18972, 18973, 18975,
    18976, 18977, 18978, 18979, 18980, 18981, 18982, 18983,
    18984, 18985, 18986, 18987, 18988, 18989, 18990, 18991,
    18992, 18993, 18994, 18995, 18996, 18997, 18999, 19000,
    19001, 19002, 19003, 19004, 19005, 19006, 19007, 19008,
    19009, 19010, 19011, 19012, 19013, 19014, 19015, 19016,
    19017, 19018, 19019, 19020, 19021, 19023, 19024, 19025,
    19026, 19027, 19028, 19029, 19030, 19031, 19032, 19033,
    19034, 19035, 19036, 19037, 19038, 19039, 19040, 19041,
    19042, 19043, 19044, 19045, 19047, 19048, 19049, 19050,
    19051, 19052, 19053, 19054, 19055, 19056, 19057, 19058,
    19059, 19060, 19061, 19062, 19063, 19064, 19065, 19066,
    19067, 19068, 19069, 19071, 19072, 19073, 19074, 19075,
    19076, 19077, 19078, 19079, 19080, 19081, 19082, 19083,
    19084, 19085, 19086, 19087, 19088, 19089, 19090, 19091,
    19092, 19093, 19095, 19096, 19097, 19098, 19099, 19100,
    19101, 19102, 19103, 19104, 19105, 19106, 19107, 19108,
    19109, 19110, 19111, 19112, 19113, 19114, 19115, 19116,
    19118, 19119, 19120, 19121, 19122, 19123, 19124, 19125,
    19126, 19127, 19128, 19129, 19130, 19131, 19132, 19133,
    19134, 19135, 19136, 19137, 19138, 19139, 19140, 19142,
    19143, 19144, 19145, 19146, 19147, 19148, 19149, 19150,
    19151, 19152, 19153, 19154, 19155, 19156, 19157, 19158,
    19159, 19160, 19161, 19162, 19163, 19164, 19166, 19167,
    19168, 19169, 19170, 19171, 19172, 19173, 19174, 19175,
    19176, 19177, 19178, 19179, 19180, 19181, 19182, 19183,
    19184, 19185, 19186, 19187, 19189, 19190, 19191, 19192,
    19193, 19194, 19195, 19196, 19197, 19198, 19199, 19200,
    19201, 19202, 19203, 19204, 19205, 19206, 19207, 19208,
    19209, 19210, 19211, 19213, 19214, 19215, 19216, 19217,
    19218, 19219, 19220, 19221, 19222, 19223, 19224, 19225,
    19226, 19227, 19228, 19229, 19230, 19231, 19232, 19233,
    19234, 19236, 19237, 19238, 19239, 19240, 19241, 19242,
    19243, 19244, 19245, 19246, 19247, 19248, 19249, 19250,
    19251, 19252, 19253, 19254, 19255, 19256, 19257, 19259,
    19260, 19261, 19262, 19263, 19264, 19265, 19266, 19267,
    19268, 19269, 19270, 19271, 19272, 19273, 19274, 19275,
    19276, 19277, 19278, 19279, 19280, 19281, 19283, 19284,
    19285, 19286, 19287, 19288, 19289, 19290, 19291, 19292,
    19293, 19294, 19295, 19296, 19297, 19298, 19299, 19300,
    19301, 19302, 19303, 19304, 19306, 19307, 19308, 19309,
    19310, 19311, 19312, 19313, 19314, 19315, 19316, 19317,
    19318, 19319, 19320, 19321, 19322, 19323, 19324, 19325,
    19326, 19327, 19329, 19330, 19331, 19332, 19333, 19334,
    19335, 19336, 19337, 19338, 19339, 19340, 19341, 19342,
    19343, 19344, 19345, 19346, 19347, 19348, 19349, 19350,
    19352, 19353, 19354, 19355, 19356, 19357, 19358, 19359,
    19360, 19361, 19362, 19363, 19364, 19365, 19366, 19367,
    19368, 19369, 19370, 19371, 19372, 19373, 19375, 19376,
    19377, 19378, 19379, 19380, 19381, 19382, 19383, 19384,
    19385, 19386, 19387, 19388, 19389, 19390, 19391, 19392,
    19393, 19394, 19395, 19396, 19398, 19399, 19400, 19401,
    19402, 19403, 19404, 19405, 19406, 19407, 19408, 19409,
    19410, 19411, 19412, 19413, 19414, 19415, 19416, 19417,
    19418, 19419, 19421, 19422, 19423, 19424, 19425, 19426,
    19427, 19428, 19429, 19430, 19431, 19432, 19433, 19434,
    19435, 19436, 19437, 19438, 19439, 19440, 19441, 19442,
    19444, 19445, 19446, 19447, 19448, 19449, 19450, 19451,
    19452, 19453, 19454, 19455, 19456, 19457, 19458, 19459,
    19460, 19461, 19462, 19463, 19464, 19465, 19467, 19468,
    19469, 19470, 19471, 19472, 19473, 19474, 19475, 19476,
    19477, 19478, 19479, 19480, 19481, 19482, 19483, 19484,
    19485, 19486, 19487, 19488, 19490, 19491, 19492, 19493,
    19494, 19495, 19496, 19497, 19498, 19499, 19500, 19501,
    19502, 19503, 19504, 19505, 19506, 19507, 19508, 19509,
    19510, 19511, 19513, 19514, 19515, 19516, 19517, 19518,
    19519, 19520, 19521, 19522, 19523, 19524, 19525, 19526,
    19527, 19528, 19529, 19530, 19531, 19532, 19533, 19535,
    19536, 19537, 19538, 19539, 19540, 19541, 19542, 19543,
    19544, 19545, 19546, 19547, 19548, 19549, 19550, 19551,
    19552, 19553, 19554, 19555, 19556, 19558, 19559, 19560,
    19561, 19562, 19563, 19564, 19565, 19566, 19567, 19568,
    19569, 19570, 19571, 19572, 19573, 19574, 19575, 19576,
    19577, 19578, 19579, 19581, 19582, 19583, 19584, 19585,
    19586, 19587, 19588, 19589, 19590, 19591, 19592, 19593,
    19594, 19595, 19596, 19597, 19598, 19599, 19600, 19601,
    19603, 19604, 19605, 19606, 19607, 19608, 19609, 19610,
    19611, 19612, 19613, 19614, 19615, 19616, 19617, 19618,
    19619, 19620, 19621, 19622, 19623, 19624, 19626, 19627,
    19628, 19629, 19630, 19631, 19632, 19633, 19634, 19635,
    19636, 19637, 19638, 19639, 19640, 19641, 19642, 19643,
    19644, 19645, 19646, 19648, 19649, 19650, 19651, 19652,
    19653, 19654, 19655, 19656, 19657, 19658, 19659, 19660,
    19661, 19662, 19663, 19664, 19665, 19666, 19667, 19668,
    19669, 19671, 19672, 19673, 19674, 19675, 19676, 19677,
    19678, 19679, 19680, 19681, 19682, 19683, 19684, 19685,
    19686, 19687, 19688, 19689, 19690, 19691, 19693, 19694,
    19695, 19696, 19697, 19698, 19699, 19700, 19701, 19702,
    19703, 19704, 19705, 19706, 19707, 19708, 19709, 19710,
    19711, 19712, 19713, 19715, 19716, 19717, 19718, 19719,
    19720, 19721, 19722, 19723, 19724, 19725, 19726, 19727,
    19728, 19729, 19730, 19731, 19732, 19733, 19734, 19735,
    19737, 19738, 19739, 19740, 19741, 19742, 19743, 19744,
    19745, 19746, 19747, 19748, 19749, 19750, 19751, 19752,
    19753, 19754, 19755, 19756, 19757, 19758, 19760, 19761,
    19762, 19763, 19764, 19765, 19766, 19767, 19768, 19769,
    19770, 19771, 19772, 19773, 19774, 19775, 19776, 19777,
    19778, 19779, 19780, 19782, 19783, 19784, 19785, 19786,
    19787, 19788, 19789, 19790, 19791, 19792, 19793, 19794,
    19795, 19796, 19797, 19798, 19799, 19800, 19801, 19802,
    19804, 19805, 19806, 19807, 19808, 19809, 19810, 19811,
    19812, 19813, 19814, 19815, 19816, 19817, 19818, 19819,
    19820, 19821, 19822, 19823, 19824, 19826, 19827, 19828,
    19829, 19830, 19831, 19832, 19833, 19834, 19835, 19836,
    19837, 19838, 19839, 19840, 19841, 19842, 19843, 19844,
    19845, 19846, 19848, 19849, 19850, 19851, 19852, 19853,
    19854, 19855, 19856, 19857, 19858, 19859, 19860, 19861,
    19862, 19863, 19864, 19865, 19866, 19867, 19868, 19870,
    19871, 19872, 19873, 19874, 19875, 19876, 19877, 19878,
    19879, 19880, 19881, 19882, 19883, 19884, 19885, 19886,
    19887, 19888, 19889, 19890, 19892, 19893, 19894, 19895,
    19896, 19897, 19898, 19899, 19900, 19901, 19902, 19903,
    19904, 19905, 19906, 19907, 19908, 19909, 19910, 19911,
    19912, 19914, 19915, 19916, 19917, 19918, 19919, 19920,
    19921, 19922, 19923, 19924, 19925, 19926, 19927, 19928,
    19929, 19930, 19931, 19932, 19933, 19935, 19936, 19937,
    19938, 19939, 19940, 19941, 19942, 19943, 19944, 19945,
    19946, 19947, 19948, 19949, 19950, 19951, 19952, 19953,
    19954, 19955, 19957, 19958, 19959, 19960, 19961, 19962,
    19963, 19964, 19965, 19966, 19967, 19968, 19969, 19970,
    19971, 19972, 19973, 19974, 19975, 19976, 19977, 19979,
    19980, 19981, 19982, 19983, 19984, 19985, 19986, 19987,
    19988, 19989, 19990, 19991, 19992, 19993, 19994, 19995,
    19996, 19997, 19998, 19999, 20001, 20002, 20003, 20004,
    20005, 20006, 20007, 20008, 20009, 20010, 20011, 20012,
    20013, 20014, 20015, 20016, 20017, 20018, 20019, 20020,
    20022, 20023, 20024, 20025, 20026, 20027, 20028, 20029,
    20030, 20031, 20032, 20033, 20034, 20035, 20036, 20037,
    20038, 20039, 20040, 20041, 20042, 20044, 20045, 20046,
    20047, 20048, 20049, 20050, 20051, 20052, 20053, 20054,
    20055, 20056, 20057, 20058, 20059, 20060, 20061, 20062,
    20063, 20065, 20066, 20067, 20068, 20069, 20070, 20071,
    20072, 20073, 20074, 20075, 20076, 20077, 20078, 20079,
    20080, 20081, 20082, 20083, 20084, 20085, 20087, 20088,
    20089, 20090, 20091, 20092, 20093, 20094, 20095, 20096,
    20097, 20098, 20099, 20100, 20101, 20102, 20103, 20104,
    20105, 20106, 20108, 20109, 20110, 20111, 20112, 20113,
    20114, 20115, 20116, 20117, 20118, 20119, 20120, 20121,
    20122, 20123, 20124, 20125, 20126, 20127, 20128, 20130,
    20131, 20132, 20133, 20134, 20135, 20136, 20137, 20138,
    20139, 20140, 20141, 20142, 20143, 20144, 20145, 20146,
    20147, 20148, 20149, 20151, 20152, 20153, 20154, 20155,
    20156, 20157, 20158, 20159, 20160, 20161, 20162, 20163,
    20164, 20165, 20166, 20167, 20168, 20169, 20170, 20172,
    20173, 20174, 20175, 20176, 20177, 20178, 20179, 20180,
    20181, 20182, 20183, 20184, 20185, 20186, 20187, 20188,
    20189, 20190, 20191, 20193, 20194, 20195, 20196, 20197,
    20198, 20199, 20200, 20201, 20202, 20203, 20204, 20205,
    20206, 20207, 20208, 20209, 20210, 20211, 20212, 20213,
    20215, 20216, 20217, 20218, 20219, 20220, 20221, 20222,
    20223, 20224, 20225, 20226, 20227, 20228, 20229, 20230,
    20231, 20232, 20233, 20234, 20236, 20237, 20238, 20239,
    20240, 20241, 20242, 20243, 20244, 20245, 20246, 20247,
    20248, 20249, 20250, 20251, 20252, 20253, 20254, 20255,
    20257, 20258, 20259, 20260, 20261, 20262, 20263, 20264,
    20265, 20266, 20267, 20268, 20269, 20270, 20271, 20272,
    20273, 20274, 20275, 20276, 20278, 20279, 20280, 20281,
    20282, 20283, 20284, 20285, 20286, 20287, 20288, 20289,
    20290, 20291, 20292, 20293, 20294, 20295, 20296, 20297,
    20299, 20300, 20301, 20302, 20303, 20304, 20305, 20306,
    20307, 20308, 20309, 20310, 20311, 20312, 20313, 20314,
    20315, 20316, 20317, 20318, 20320, 20321, 20322, 20323,
    20324, 20325, 20326, 20327, 20328, 20329, 20330, 20331,
    20332, 20333, 20334, 20335, 20336, 20337, 20338, 20339,
    20341, 20342, 20343, 20344, 20345, 20346, 20347, 20348,
    20349, 20350, 20351, 20352, 20353, 20354, 20355, 20356,
    20357, 20358, 20359, 20360, 20362, 20363, 20364, 20365,
    20366, 20367, 20368, 20369, 20370, 20371, 20372, 20373,
    20374, 20375, 20376, 20377, 20378, 20379, 20380, 20381,
    20383, 20384, 20385, 20386, 20387, 20388, 20389, 20390,
    20391, 20392, 20393, 20394, 20395, 20396, 20397, 20398,
    20399, 20400, 20401, 20402, 20404, 20405, 20406, 20407,
    20408, 20409, 20410, 20411, 20412, 20413, 20414, 20415,
    20416, 20417, 20418, 20419, 20420, 20421, 20422, 20424,
    20425, 20426, 20427, 20428, 20429, 20430, 20431, 20432,
    20433, 20434, 20435, 20436, 20437, 20438, 20439, 20440,
    20441, 20442, 20443, 20445, 20446, 20447, 20448, 20449,
    20450, 20451, 20452, 20453, 20454, 20455, 20456, 20457,
    20458, 20459, 20460, 20461, 20462, 20463, 20464, 20466,
    20467, 20468, 20469, 20470, 20471, 20472, 20473, 20474,
    20475, 20476, 20477, 20478, 20479, 20480, 20481, 20482,
    20483, 20484, 20486, 20487, 20488, 20489, 20490, 20491,
    20492, 20493, 20494, 20495, 20496, 20497, 20498, 20499,
    20500, 20501, 20502, 20503, 20504, 20505, 20507, 20508,
    20509, 20510, 20511, 20512, 20513, 20514, 20515, 20516,
    20517, 20518, 20519, 20520, 20521, 20522, 20523, 20524,
    20525, 20526, 20528, 20529, 20530, 20531, 20532, 20533,
    20534, 20535, 20536, 20537, 20538, 20539, 20540, 20541,
    20542, 20543, 20544, 20545, 20546, 20548, 20549, 20550,
    20551, 20552, 20553, 20554, 20555, 20556, 20557, 20558,
    20559, 20560, 20561, 20562, 20563, 20564, 20565, 20566,
    20567, 20569, 20570, 20571, 20572, 20573, 20574, 20575,
    20576, 20577, 20578, 20579, 20580, 20581, 20582, 20583,
    20584, 20585, 20586, 20587, 20589, 20590, 20591, 20592,
    20593, 20594, 20595, 20596, 20597, 20598, 20599, 20600,
    20601, 20602, 20603, 20604, 20605, 20606, 20607, 20608,
    20610, 20611, 20612, 20613, 20614, 20615, 20616, 20617,
    20618, 20619, 20620, 20621, 20622, 20623, 20624, 20625,
    20626, 20627, 20628, 20630, 20631, 20632, 20633, 20634,
    20635, 20636, 20637, 20638, 20639, 20640, 20641, 20642,
    20643, 20644, 20645, 20646, 20647, 20648, 20650, 20651,
    20652, 20653, 20654, 20655, 20656, 20657, 20658, 20659,
    20660, 20661, 20662, 20663, 20664, 20665, 20666, 20667,
    20668, 20669, 20671, 20672, 20673, 20674, 20675, 20676,
    20677, 20678, 20679, 20680, 20681, 20682, 20683, 20684,
    20685, 20686, 20687, 20688, 20689, 20691, 20692, 20693,
    20694, 20695, 20696, 20697, 20698, 20699, 20700, 20701,
    20702, 20703, 20704, 20705, 20706, 20707, 20708, 20709,
    20711, 20712, 20713, 20714, 20715, 20716, 20717, 20718,
    20719, 20720, 20721, 20722, 20723, 20724, 20725, 20726,
    20727, 20728, 20729, 20731, 20732, 20733, 20734, 20735,
    20736, 20737, 20738, 20739, 20740, 20741, 20742, 20743,
    20744, 20745, 20746, 20747, 20748, 20749, 20751, 20752,
    20753, 20754, 20755, 20756, 20757, 20758, 20759, 20760,
    20761, 20762, 20763, 20764, 20765, 20766, 20767, 20768,
    20769, 20771, 20772, 20773, 20774, 20775, 20776, 20777,
    20778, 20779, 20780, 20781, 20782, 20783, 20784, 20785,
    20786, 20787, 20788, 20789, 20790, 20792, 20793, 20794,
    20795, 20796, 20797, 20798, 20799, 20800, 20801, 20802,
    20803, 20804, 20805, 20806, 20807, 20808, 20809, 20810,
    20812, 20813, 20814, 20815, 20816, 20817, 20818, 20819,
    20820, 20821, 20822, 20823, 20824, 20825, 20826, 20827,
    20828, 20829, 20830, 20832, 20833, 20834, 20835, 20836,
    20837, 20838, 20839, 20840, 20841, 20842, 20843, 20844,
    20845, 20846, 20847, 20848, 20849, 20851, 20852, 20853,
    20854, 20855, 20856, 20857, 20858, 20859, 20860, 20861,
    20862, 20863, 20864, 20865, 20866, 20867, 20868, 20869,
    20871, 20872, 20873, 20874, 20875, 20876, 20877, 20878,
    20879, 20880, 20881, 20882, 20883, 20884, 20885, 20886,
    20887, 20888, 20889, 20891, 20892, 20893, 20894, 20895,
    20896, 20897, 20898, 20899, 20900, 20901, 20902, 20903,
    20904, 20905, 20906, 20907, 20908, 20909, 20911, 20912,
    20913, 20914, 20915, 20916, 20917, 20918, 20919, 20920,
    20921, 20922, 20923, 20924, 20925, 20926, 20927, 20928,
    20929, 20931, 20932, 20933, 20934, 20935, 20936, 20937,
    20938, 20939, 20940, 20941, 20942, 20943, 20944, 20945,
    20946, 20947, 20948, 20949, 20951, 20952, 20953, 20954,
    20955, 20956, 20957, 20958, 20959, 20960, 20961, 20962,
    20963, 20964, 20965, 20966, 20967, 20968, 20970, 20971,
    20972, 20973, 20974, 20975, 20976, 20977, 20978, 20979,
    20980, 20981, 20982, 20983, 20984, 20985, 20986, 20987,
    20988, 20990, 20991, 20992, 20993, 20994, 20995, 20996,
    20997, 20998, 20999, 21000, 21001, 21002, 21003, 21004,
    21005, 21006, 21007, 21008, 21010, 21011, 21012, 21013,
    21014, 21015, 21016, 21017, 21018, 21019, 21020, 21021,
    21022, 21023, 21024, 21025, 21026, 21027, 21029, 21030,
    21031, 21032, 21033, 21034, 21035, 21036, 21037, 21038,
    21039, 21040, 21041, 21042, 21043, 21044, 21045, 21046,
    21047, 21049, 21050, 21051, 21052, 21053, 21054, 21055,
    21056, 21057, 21058, 21059, 21060, 21061, 21062, 21063,
    21064, 21065, 21066, 21068, 21069, 21070, 21071, 21072,
    21073, 21074, 21075, 21076, 21077, 21078, 21079, 21080,
    21081, 21082, 21083, 21084, 21085, 21086, 21088, 21089,
    21090, 21091, 21092, 21093, 21094, 21095, 21096, 21097,
    21098, 21099, 21100, 21101, 21102, 21103, 21104, 21105,
    21107, 21108, 21109, 21110, 21111, 21112, 21113, 21114,
    21115, 21116, 21117, 21118, 21119, 21120, 21121, 21122,
    21123, 21124, 21125, 21127, 21128, 21129, 21130, 21131,
    21132, 21133, 21134, 21135, 21136, 21137, 21138, 21139,
    21140, 21141, 21142, 21143, 21144, 21146, 21147, 21148,
    21149, 21150, 21151, 21152, 21153, 21154, 21155, 21156,
    21157, 21158, 21159, 21160, 21161, 21162, 21163, 21164,
    21166, 21167, 21168, 21169, 21170, 21171, 21172, 21173,
    21174, 21175, 21176, 21177, 21178, 21179, 21180, 21181,
    21182, 21183, 21185, 21186, 21187, 21188, 21189, 21190,
    21191, 21192, 21193, 21194, 21195, 21196, 21197, 21198,
    21199, 21200, 21201, 21202, 21204, 21205, 21206, 21207,
    21208, 21209, 21210, 21211, 21212, 21213, 21214, 21215,
    21216, 21217, 21218, 21219, 21220, 21221, 21223, 21224,
    21225, 21226, 21227, 21228, 21229, 21230, 21231, 21232,
    21233, 21234, 21235, 21236, 21237, 21238, 21239, 21240,
    21241, 21243, 21244, 21245, 21246, 21247, 21248, 21249,
    21250, 21251, 21252, 21253, 21254, 21255, 21256, 21257,
    21258, 21259, 21260, 21262, 21263, 21264, 21265, 21266,
    21267, 21268, 21269, 21270, 21271, 21272, 21273, 21274,
    21275, 21276, 21277, 21278, 21279, 21281, 21282, 21283,
    21284, 21285, 21286, 21287, 21288, 21289, 21290, 21291,
    21292, 21293, 21294, 21295, 21296, 21297, 21298, 21300,
    21301, 21302, 21303, 21304, 21305, 21306, 21307, 21308,
    21309, 21310, 21311, 21312, 21313, 21314, 21315, 21316,
    21317, 21319, 21320, 21321, 21322, 21323, 21324, 21325,
    21326, 21327, 21328, 21329, 21330, 21331, 21332, 21333,
    21334, 21335, 21336, 21338, 21339, 21340, 21341, 21342,
    21343, 21344, 21345, 21346, 21347, 21348, 21349, 21350,
    21351, 21352, 21353, 21354, 21355, 21357, 21358, 21359,
    21360, 21361, 21362, 21363, 21364, 21365, 21366, 21367,
    21368, 21369, 21370, 21371, 21372, 21373, 21374, 21376,
    21377, 21378, 21379, 21380, 21381, 21382, 21383, 21384,
    21385, 21386, 21387, 21388, 21389, 21390, 21391, 21392,
    21393, 21395, 21396, 21397, 21398, 21399, 21400, 21401,
    21402, 21403, 21404, 21405, 21406, 21407, 21408, 21409,
    21410, 21411, 21412, 21414, 21415, 21416, 21417, 21418,
    21419, 21420, 21421, 21422, 21423, 21424, 21425, 21426,
    21427, 21428, 21429, 21430, 21431, 21433, 21434, 21435,
    21436, 21437, 21438, 21439, 21440, 21441, 21442, 21443,
    21444, 21445, 21446, 21447, 21448, 21449, 21450, 21452,
    21453, 21454, 21455, 21456, 21457, 21458, 21459, 21460,
    21461, 21462, 21463, 21464, 21465, 21466, 21467, 21468,
    21469, 21471, 21472, 21473, 21474, 21475, 21476, 21477,
    21478, 21479, 21480, 21481, 21482, 21483, 21484, 21485,
    21486, 21487, 21489, 21490, 21491, 21492, 21493, 21494,
    21495, 21496, 21497, 21498, 21499, 21500, 21501, 21502,
    21503, 21504, 21505, 21506, 21508, 21509, 21510, 21511,
    21512, 21513, 21514, 21515, 21516, 21517, 21518, 21519,
    21520, 21521, 21522, 21523, 21524, 21525, 21527, 21528,
    21529, 21530, 21531, 21532, 21533, 21534, 21535, 21536,
    21537, 21538, 21539, 21540, 21541, 21542, 21543, 21544,
    21546, 21547, 21548, 21549, 21550, 21551, 21552, 21553,
    21554, 21555, 21556, 21557, 21558, 21559, 21560, 21561,
    21562, 21564, 21565, 21566, 21567, 21568, 21569, 21570,
    21571, 21572, 21573, 21574, 21575, 21576, 21577, 21578,
    21579, 21580, 21581, 21583, 21584, 21585, 21586, 21587,
    21588, 21589, 21590, 21591, 21592, 21593, 21594, 21595,
    21596, 21597, 21598, 21599, 21601, 21602, 21603, 21604,
    21605, 21606, 21607, 21608, 21609, 21610, 21611, 21612,
    21613, 21614, 21615, 21616, 21617, 21618, 21620, 21621,
    21622, 21623, 21624, 21625, 21626, 21627, 21628, 21629,
    21630, 21631, 21632, 21633, 21634, 21635, 21636, 21637,
    21639, 21640, 21641, 21642, 21643, 21644, 21645, 21646,
    21647, 21648, 21649, 21650, 21651, 21652, 21653, 21654,
    21655, 21657, 21658, 21659, 21660, 21661, 21662, 21663,
    21664, 21665, 21666, 21667, 21668, 21669, 21670, 21671,
    21672, 21673, 21674, 21676, 21677, 21678, 21679, 21680,
    21681, 21682, 21683, 21684, 21685, 21686, 21687, 21688,
    21689, 21690, 21691, 21692, 21694, 21695, 21696, 21697,
    21698, 21699, 21700, 21701, 21702, 21703, 21704, 21705,
    21706, 21707, 21708, 21709, 21710, 21712, 21713, 21714,
    21715, 21716, 21717, 21718, 21719, 21720, 21721, 21722,
    21723, 21724, 21725, 21726, 21727, 21728, 21729, 21731,
    21732, 21733, 21734, 21735, 21736, 21737, 21738, 21739,
    21740, 21741, 21742, 21743, 21744, 21745, 21746, 21747,
    21749, 21750, 21751, 21752, 21753, 21754, 21755, 21756,
    21757, 21758, 21759, 21760, 21761, 21762, 21763, 21764,
    21765, 21767, 21768, 21769, 21770, 21771, 21772, 21773,
    21774, 21775, 21776, 21777, 21778, 21779, 21780, 21781,
    21782, 21783, 21784, 21786, 21787, 21788, 21789, 21790,
    21791, 21792, 21793, 21794, 21795, 21796, 21797, 21798,
    21799, 21800, 21801, 21802, 21804, 21805, 21806, 21807,
    21808, 21809, 21810, 21811, 21812, 21813, 21814, 21815,
    21816, 21817, 21818, 21819, 21820, 21822, 21823, 21824,
    21825, 21826, 21827, 21828, 21829, 21830, 21831, 21832,
    21833, 21834, 21835, 21836, 21837, 21838, 21840, 21841,
    21842, 21843, 21844, 21845, 21846, 21847, 21848, 21849,
    21850, 21851, 21852, 21853, 21854, 21855, 21856, 21857,
    21859, 21860, 21861, 21862, 21863, 21864, 21865, 21866,
    21867, 21868, 21869, 21870, 21871, 21872, 21873, 21874,
    21875, 21877, 21878, 21879, 21880, 21881, 21882, 21883,
    21884, 21885, 21886, 21887, 21888, 21889, 21890, 21891,
    21892, 21893, 21895, 21896, 21897, 21898, 21899, 21900,
    21901, 21902, 21903, 21904, 21905, 21906, 21907, 21908,
    21909, 21910, 21911, 21913, 21914, 21915, 21916, 21917,
    21918, 21919, 21920, 21921, 21922, 21923, 21924, 21925,
    21926, 21927, 21928, 21929, 21931, 21932, 21933, 21934,
    21935, 21936, 21937, 21938, 21939, 21940, 21941, 21942,
    21943, 21944, 21945, 21946, 21947, 21949, 21950, 21951,
    21952, 21953, 21954, 21955, 21956, 21957, 21958, 21959,
    21960, 21961, 21962, 21963, 21964, 21965, 21967, 21968,
    21969, 21970, 21971, 21972, 21973, 21974, 21975, 21976,
    21977, 21978, 21979, 21980, 21981, 21982, 21983, 21985,
    21986, 21987, 21988, 21989, 21990, 21991, 21992, 21993,
    21994, 21995, 21996, 21997, 21998, 21999, 22000, 22001,
    22003, 22004, 22005, 22006, 22007, 22008, 22009, 22010,
    22011, 22012, 22013, 22014, 22015, 22016, 22017, 22018,
    22019, 22021, 22022, 22023, 22024, 22025, 22026, 22027,
    22028, 22029, 22030, 22031, 22032, 22033, 22034, 22035,
    22036, 22037, 22039, 22040, 22041, 22042, 22043, 22044,
    22045, 22046, 22047, 22048, 22049, 22050, 22051, 22052,
    22053, 22054, 22056, 22057, 22058, 22059, 22060, 22061,
    22062, 22063, 22064, 22065, 22066, 22067, 22068, 22069,
    22070, 22071, 22072, 22074, 22075, 22076, 22077, 22078,
    22079, 22080, 22081, 22082, 22083, 22084, 22085, 22086,
    22087, 22088, 22089, 22090, 22092, 22093, 22094, 22095,
    22096, 22097, 22098, 22099, 22100, 22101, 22102, 22103,
    22104, 22105, 22106, 22107, 22108, 22110, 22111, 22112,
    22113, 22114, 22115, 22116, 22117, 22118, 22119, 22120,
    22121, 22122, 22123, 22124, 22125, 22127, 22128, 22129,
    22130, 22131, 22132, 22133, 22134, 22135, 22136, 22137,
    22138, 22139, 22140, 22141, 22142, 22143, 22145, 22146,
    22147, 22148, 22149, 22150, 22151, 22152, 22153, 22154,
    22155, 22156, 22157, 22158, 22159, 22160, 22161, 22163,
    22164, 22165, 22166, 22167, 22168, 22169, 22170, 22171,
    22172, 22173, 22174, 22175, 22176, 22177, 22178, 22180,
    22181, 22182, 22183, 22184, 22185, 22186, 22187, 22188,
    22189, 22190, 22191, 22192, 22193, 22194, 22195, 22196,
    22198, 22199, 22200, 22201, 22202, 22203, 22204, 22205,
    22206, 22207, 22208, 22209, 22210, 22211, 22212, 22213,
    22214, 22216, 22217, 22218, 22219, 22220, 22221, 22222,
    22223, 22224, 22225, 22226, 22227, 22228, 22229, 22230,
    22231, 22233, 22234, 22235, 22236, 22237, 22238, 22239,
    22240, 22241, 22242, 22243, 22244, 22245, 22246, 22247,
    22248, 22249, 22251, 22252, 22253, 22254, 22255, 22256,
    22257, 22258, 22259, 22260, 22261, 22262, 22263, 22264,
    22265, 22266, 22268, 22269, 22270, 22271, 22272, 22273,
    22274, 22275, 22276, 22277, 22278, 22279, 22280, 22281,
    22282, 22283, 22284, 22286, 22287, 22288, 22289, 22290,
    22291, 22292, 22293, 22294, 22295, 22296, 22297, 22298,
    22299, 22300, 22301, 22303, 22304, 22305, 22306, 22307,
    22308, 22309, 22310, 22311, 22312, 22313, 22314, 22315,
    22316, 22317, 22318, 22319, 22321, 22322, 22323, 22324,
    22325, 22326, 22327, 22328, 22329, 22330, 22331, 22332,
    22333, 22334, 22335, 22336, 22338, 22339, 22340, 22341,
    22342, 22343, 22344, 22345, 22346, 22347, 22348, 22349,
    22350, 22351, 22352, 22353, 22355, 22356, 22357, 22358,
    22359, 22360, 22361, 22362, 22363, 22364, 22365, 22366,
    22367, 22368, 22369, 22370, 22371, 22373, 22374, 22375,
    22376, 22377, 22378, 22379, 22380, 22381, 22382, 22383,
    22384, 22385, 22386, 22387, 22388, 22390, 22391, 22392,
    22393, 22394, 22395, 22396, 22397, 22398, 22399, 22400,
    22401, 22402, 22403, 22404, 22405, 22407, 22408, 22409,
    22410, 22411, 22412, 22413, 22414, 22415, 22416, 22417,
    22418, 22419, 22420, 22421, 22422, 22423, 22425, 22426,
    22427, 22428, 22429, 22430, 22431, 22432, 22433, 22434,
    22435, 22436, 22437, 22438, 22439, 22440, 22442, 22443,
    22444, 22445, 22446, 22447, 22448, 22449, 22450, 22451,
    22452, 22453, 22454, 22455, 22456, 22457, 22459, 22460,
    22461, 22462, 22463, 22464, 22465, 22466, 22467, 22468,
    22469, 22470, 22471, 22472, 22473, 22474, 22476, 22477,
    22478, 22479, 22480, 22481, 22482, 22483, 22484, 22485,
    22486, 22487, 22488, 22489, 22490, 22491, 22493, 22494,
    22495, 22496, 22497, 22498, 22499, 22500, 22501, 22502,
    22503, 22504, 22505, 22506, 22507, 22508, 22510, 22511,
    22512, 22513, 22514, 22515, 22516, 22517, 22518, 22519,
    22520, 22521, 22522, 22523, 22524, 22525, 22526, 22528,
    22529, 22530, 22531, 22532, 22533, 22534, 22535, 22536,
    22537, 22538, 22539, 22540, 22541, 22542, 22543, 22545,
    22546, 22547, 22548, 22549, 22550, 22551, 22552, 22553,
    22554, 22555, 22556, 22557, 22558, 22559, 22560, 22562,
    22563, 22564, 22565, 22566, 22567, 22568, 22569, 22570,
    22571, 22572, 22573, 22574, 22575, 22576, 22577, 22579,
    22580, 22581, 22582, 22583, 22584, 22585, 22586, 22587,
    22588, 22589, 22590, 22591, 22592, 22593, 22594, 22596,
    22597, 22598, 22599, 22600, 22601, 22602, 22603, 22604,
    22605, 22606, 22607, 22608, 22609, 22610, 22611, 22613,
    22614, 22615, 22616, 22617, 22618, 22619, 22620, 22621,
    22622, 22623, 22624, 22625, 22626, 22627, 22628, 22630,
    22631, 22632, 22633, 22634, 22635, 22636, 22637, 22638,
    22639, 22640, 22641, 22642, 22643, 22644, 22645, 22647,
    22648, 22649, 22650, 22651, 22652, 22653, 22654, 22655,
    22656, 22657, 22658, 22659, 22660, 22661, 22662, 22664,
    22665, 22666, 22667, 22668, 22669, 22670, 22671, 22672,
    22673, 22674, 22675, 22676, 22677, 22678, 22680, 22681,
    22682, 22683, 22684, 22685, 22686, 22687, 22688, 22689,
    22690, 22691, 22692, 22693, 22694, 22695, 22697, 22698,
    22699, 22700, 22701, 22702, 22703, 22704, 22705, 22706,
    22707, 22708, 22709, 22710, 22711, 22712, 22714, 22715,
    22716, 22717, 22718, 22719, 22720, 22721, 22722, 22723,
    22724, 22725, 22726, 22727, 22728, 22729, 22731, 22732,
    22733, 22734, 22735, 22736, 22737, 22738, 22739, 22740,
    22741, 22742, 22743, 22744, 22745, 22746, 22748, 22749,
    22750, 22751, 22752, 22753, 22754, 22755, 22756, 22757,
    22758, 22759, 22760, 22761, 22762, 22764, 22765, 22766,
    22767, 22768, 22769, 22770, 22771, 22772, 22773, 22774,
    22775, 22776, 22777, 22778, 22779, 22781, 22782, 22783,
    22784, 22785, 22786, 22787, 22788, 22789, 22790, 22791,
    22792, 22793, 22794, 22795, 22796, 22798, 22799, 22800,
    22801, 22802, 22803, 22804, 22805, 22806, 22807, 22808,
    22809, 22810, 22811, 22812, 22813, 22815, 22816, 22817,
    22818, 22819, 22820, 22821, 22822, 22823, 22824, 22825,
    22826, 22827, 22828, 22829, 22831, 22832, 22833, 22834,
    22835, 22836, 22837, 22838, 22839, 22840, 22841, 22842,
    22843, 22844, 22845, 22846, 22848, 22849, 22850, 22851,
    22852, 22853, 22854, 22855, 22856, 22857, 22858, 22859,
    22860, 22861, 22862, 22864, 22865, 22866, 22867, 22868,
    22869, 22870, 22871, 22872, 22873, 22874, 22875, 22876,
    22877, 22878, 22879, 22881, 22882, 22883, 22884, 22885,
    22886, 22887, 22888, 22889, 22890, 22891, 22892, 22893,
    22894, 22895, 22896, 22898, 22899, 22900, 22901, 22902,
    22903, 22904, 22905, 22906, 22907, 22908, 22909, 22910,
    22911, 22912, 22914, 22915, 22916, 22917, 22918, 22919,
    22920, 22921, 22922, 22923, 22924, 22925, 22926, 22927,
    22928, 22929, 22931, 22932, 22933, 22934, 22935, 22936,
    22937, 22938, 22939, 22940, 22941, 22942, 22943, 22944,
    22945, 22947, 22948, 22949, 22950, 22951, 22952, 22953,
    22954, 22955, 22956, 22957, 22958, 22959, 22960, 22961,
    22962, 22964, 22965, 22966, 22967, 22968, 22969, 22970,
    22971, 22972, 22973, 22974, 22975, 22976, 22977, 22978,
    22980, 22981, 22982, 22983, 22984, 22985, 22986, 22987,
    22988, 22989, 22990, 22991, 22992, 22993, 22994, 22995,
    22997, 22998, 22999, 23000, 23001, 23002, 23003, 23004,
    23005, 23006, 23007, 23008, 23009, 23010, 23011, 23013,
    23014, 23015, 23016, 23017, 23018, 23019, 23020, 23021,
    23022, 23023, 23024, 23025, 23026, 23027, 23029, 23030,
    23031, 23032, 23033, 23034, 23035, 23036, 23037, 23038,
    23039, 23040, 23041, 23042, 23043, 23044, 23046, 23047,
    23048, 23049, 23050, 23051, 23052, 23053, 23054, 23055,
    23056, 23057, 23058, 23059, 23060, 23062, 23063, 23064,
    23065, 23066, 23067, 23068, 23069, 23070, 23071, 23072,
    23073, 23074, 23075, 23076, 23078, 23079, 23080, 23081,
    23082, 23083, 23084, 23085, 23086, 23087, 23088, 23089,
    23090, 23091, 23092, 23093, 23095, 23096, 23097, 23098,
    23099, 23100, 23101, 23102, 23103, 23104, 23105, 23106,
    23107, 23108, 23109, 23111, 23112, 23113, 23114, 23115,
    23116, 23117, 23118, 23119, 23120, 23121, 23122, 23123,
    23124, 23125, 23127, 23128, 23129, 23130, 23131, 23132,
    23133, 23134, 23135, 23136, 23137, 23138, 23139, 23140,
    23141, 23143, 23144, 23145, 23146, 23147, 23148, 23149,
    23150, 23151, 23152, 23153, 23154, 23155, 23156, 23157,
    23159, 23160, 23161, 23162, 23163, 23164, 23165, 23166,
    23167, 23168, 23169, 23170, 23171, 23172, 23173, 23174,
    23176, 23177, 23178, 23179, 23180, 23181, 23182, 23183,
    23184, 23185, 23186, 23187, 23188, 23189, 23190, 23192,
    23193, 23194, 23195, 23196, 23197, 23198, 23199, 23200,
    23201, 23202, 23203, 23204, 23205, 23206, 23208, 23209,
    23210, 23211, 23212, 23213, 23214, 23215, 23216, 23217,
    23218, 23219, 23220, 23221, 23222, 23224, 23225, 23226,
    23227, 23228, 23229, 23230, 23231, 23232, 23233, 23234,
    23235, 23236, 23237, 23238, 23240, 23241, 23242, 23243,
    23244, 23245, 23246, 23247, 23248, 23249, 23250, 23251,
    23252, 23253, 23254, 23256, 23257, 23258, 23259, 23260,
    23261, 23262, 23263, 23264, 23265, 23266, 23267, 23268,
    23269, 23270, 23272, 23273, 23274, 23275, 23276, 23277,
    23278, 23279, 23280, 23281, 23282, 23283, 23284, 23285,
    23286, 23288, 23289, 23290, 23291, 23292, 23293, 23294,
    23295, 23296, 23297, 23298, 23299, 23300, 23301, 23302,
    23304, 23305, 23306, 23307, 23308, 23309, 23310, 23311,
    23312, 23313, 23314, 23315, 23316, 23317, 23318, 23320,
    23321, 23322, 23323, 23324, 23325, 23326, 23327, 23328,
    23329, 23330, 23331, 23332, 23333, 23334, 23336, 23337,
    23338, 23339, 23340, 23341, 23342, 23343, 23344, 23345,
    23346, 23347, 23348, 23349, 23350, 23352, 23353, 23354,
    23355, 23356, 23357, 23358, 23359, 23360, 23361, 23362,
    23363, 23364, 23365, 23366, 23368, 23369, 23370, 23371,
    23372, 23373, 23374, 23375, 23376, 23377, 23378, 23379,
    23380, 23381, 23382, 23384, 23385, 23386, 23387, 23388,
    23389, 23390, 23391, 23392, 23393, 23394, 23395, 23396,
    23397, 23398, 23400, 23401, 23402, 23403, 23404, 23405,
    23406, 23407, 23408, 23409, 23410, 23411, 23412, 23413,
    23414, 23416, 23417, 23418, 23419, 23420, 23421, 23422,
    23423, 23424, 23425, 23426, 23427, 23428, 23429, 23431,
    23432, 23433, 23434, 23435, 23436, 23437, 23438, 23439,
    23440, 23441, 23442, 23443, 23444, 23445, 23447, 23448,
    23449, 23450, 23451, 23452, 23453, 23454, 23455, 23456,
    23457, 23458, 23459, 23460, 23461, 23463, 23464, 23465,
    23466, 23467, 23468, 23469, 23470, 23471, 23472, 23473,
    23474, 23475, 23476, 23477, 23479, 23480, 23481, 23482,
    23483, 23484, 23485, 23486, 23487, 23488, 23489, 23490,
    23491, 23492, 23493, 23495, 23496, 23497, 23498, 23499,
    23500, 23501, 23502, 23503, 23504, 23505, 23506, 23507,
    23508, 23510, 23511, 23512, 23513, 23514, 23515, 23516,
    23517, 23518, 23519, 23520, 23521, 23522, 23523, 23524,
    23526, 23527, 23528, 23529, 23530, 23531, 23532, 23533,
    23534, 23535, 23536, 23537, 23538, 23539, 23540, 23542,
    23543, 23544, 23545, 23546, 23547, 23548, 23549, 23550,
    23551, 23552, 23553, 23554, 23555, 23557, 23558, 23559,
    23560, 23561, 23562, 23563, 23564, 23565, 23566, 23567,
    23568, 23569, 23570, 23571, 23573, 23574, 23575, 23576,
    23577, 23578, 23579, 23580, 23581, 23582, 23583, 23584,
    23585, 23586, 23587, 23589, 23590, 23591, 23592, 23593,
    23594, 23595, 23596, 23597, 23598, 23599, 23600, 23601,
    23602, 23604, 23605, 23606, 23607, 23608, 23609, 23610,
    23611, 23612, 23613, 23614, 23615, 23616, 23617, 23618,
    23620, 23621, 23622, 23623, 23624, 23625, 23626, 23627,
    23628, 23629, 23630, 23631, 23632, 23633, 23635, 23636,
    23637, 23638, 23639, 23640, 23641, 23642, 23643, 23644,
    23645, 23646, 23647, 23648, 23649, 23651, 23652, 23653,
    23654, 23655, 23656, 23657, 23658, 23659, 23660, 23661,
    23662, 23663, 23664, 23666, 23667, 23668, 23669, 23670,
    23671, 23672, 23673, 23674, 23675, 23676, 23677, 23678,
    23679, 23680, 23682, 23683, 23684, 23685, 23686, 23687,
    23688, 23689, 23690, 23691, 23692, 23693, 23694, 23695,
    23697, 23698, 23699, 23700, 23701, 23702, 23703, 23704,
    23705, 23706, 23707, 23708, 23709, 23710, 23711, 23713,
    23714, 23715, 23716, 23717, 23718, 23719, 23720, 23721,
    23722, 23723, 23724, 23725, 23726, 23728, 23729, 23730,
    23731, 23732, 23733, 23734, 23735, 23736, 23737, 23738,
    23739, 23740, 23741, 23742, 23744, 23745, 23746, 23747,
    23748, 23749, 23750, 23751, 23752, 23753, 23754, 23755,
    23756, 23757, 23759, 23760, 23761, 23762, 23763, 23764,
    23765, 23766, 23767, 23768, 23769, 23770, 23771, 23772,
    23774, 23775, 23776, 23777, 23778, 23779, 23780, 23781,
    23782, 23783, 23784, 23785, 23786, 23787, 23788, 23790,
    23791, 23792, 23793, 23794, 23795, 23796, 23797, 23798,
    23799, 23800, 23801, 23802, 23803, 23805, 23806, 23807,
    23808, 23809, 23810, 23811, 23812, 23813, 23814, 23815,
    23816, 23817, 23818, 23820, 23821, 23822, 23823, 23824,
    23825, 23826, 23827, 23828, 23829, 23830, 23831, 23832,
    23833, 23834, 23836, 23837, 23838, 23839, 23840, 23841,
    23842, 23843, 23844, 23845, 23846, 23847, 23848, 23849,
    23851, 23852, 23853, 23854, 23855, 23856, 23857, 23858,
    23859, 23860, 23861, 23862, 23863, 23864, 23866, 23867,
    23868, 23869, 23870, 23871, 23872, 23873, 23874, 23875,
    23876, 23877, 23878, 23879, 23881, 23882, 23883, 23884,
    23885, 23886, 23887, 23888, 23889, 23890, 23891, 23892,
    23893, 23894, 23895, 23897, 23898, 23899, 23900, 23901,
    23902, 23903, 23904, 23905, 23906, 23907, 23908, 23909,
    23910, 23912, 23913, 23914, 23915, 23916, 23917, 23918,
    23919, 23920, 23921, 23922, 23923, 23924, 23925, 23927,
    23928, 23929, 23930, 23931, 23932, 23933, 23934, 23935,
    23936, 23937, 23938, 23939, 23940, 23942, 23943, 23944,
    23945, 23946, 23947, 23948, 23949, 23950, 23951, 23952,
    23953, 23954, 23955, 23957, 23958, 23959, 23960, 23961,
    23962, 23963, 23964, 23965, 23966, 23967, 23968, 23969,
    23970, 23972, 23973, 23974, 23975, 23976, 23977, 23978,
    23979, 23980, 23981, 23982, 23983, 23984, 23985, 23986,
    23988, 23989, 23990, 23991, 23992, 23993, 23994, 23995,
    23996, 23997, 23998, 23999, 24000, 24001, 24003, 24004,
    24005, 24006, 24007, 24008, 24009, 24010, 24011, 24012,
    24013, 24014, 24015, 24016, 24018, 24019, 24020, 24021,
    24022, 24023, 24024, 24025, 24026, 24027, 24028, 24029,
    24030, 24031, 24033, 24034, 24035, 24036, 24037, 24038,
    24039, 24040, 24041, 24042, 24043, 24044, 24045, 24046,
    24048, 24049, 24050, 24051, 24052, 24053, 24054, 24055,
    24056, 24057, 24058, 24059, 24060, 24061, 24063, 24064,
    24065, 24066, 24067, 24068, 24069, 24070, 24071, 24072,
    24073, 24074, 24075, 24076, 24078, 24079, 24080, 24081,
    24082, 24083, 24084, 24085, 24086, 24087, 24088, 24089,
    24090, 24091, 24093, 24094, 24095, 24096, 24097, 24098,
    24099, 24100, 24101, 24102, 24103, 24104, 24105, 24106,
    24108, 24109, 24110, 24111, 24112, 24113, 24114, 24115,
    24116, 24117, 24118, 24119, 24120, 24121, 24123, 24124,
    24125, 24126, 24127, 24128, 24129, 24130, 24131, 24132,
    24133, 24134, 24135, 24136, 24138, 24139, 24140, 24141,
    24142, 24143, 24144, 24145, 24146, 24147, 24148, 24149,
    24150, 24151, 24153, 24154, 24155, 24156, 24157, 24158,
    24159, 24160, 24161, 24162, 24163, 24164, 24165, 24167,
    24168, 24169, 24170, 24171, 24172, 24173, 24174, 24175,
    24176, 24177, 24178, 24179, 24180, 24182, 24183, 24184,
    24185, 24186, 24187, 24188, 24189, 24190, 24191, 24192,
    24193, 24194, 24195, 24197, 24198, 24199, 24200, 24201,
    24202, 24203, 24204, 24205, 24206, 24207, 24208, 24209,
    24210, 24212, 24213, 24214, 24215, 24216, 24217, 24218,
    24219, 24220, 24221, 24222, 24223, 24224, 24225, 24227,
    24228, 24229, 24230, 24231, 24232, 24233, 24234, 24235,
    24236, 24237, 24238, 24239, 24240, 24242, 24243, 24244,
    24245, 24246, 24247, 24248, 24249, 24250, 24251, 24252,
    24253, 24254, 24256, 24257, 24258, 24259, 24260, 24261,
    24262, 24263, 24264, 24265, 24266, 24267, 24268, 24269,
    24271, 24272, 24273, 24274, 24275, 24276, 24277, 24278,
    24279, 24280, 24281, 24282, 24283, 24284, 24286, 24287,
    24288, 24289, 24290, 24291, 24292, 24293, 24294, 24295,
    24296, 24297, 24298, 24299, 24301, 24302, 24303, 24304,
    24305, 24306, 24307, 24308, 24309, 24310, 24311, 24312,
    24313, 24315, 24316, 24317, 24318, 24319, 24320, 24321,
    24322, 24323, 24324, 24325, 24326, 24327, 24328, 24330,
    24331, 24332, 24333, 24334, 24335, 24336, 24337, 24338,
    24339, 24340, 24341, 24342, 24343, 24345, 24346, 24347,
    24348, 24349, 24350, 24351, 24352, 24353, 24354, 24355,
    24356, 24357, 24359, 24360, 24361, 24362, 24363, 24364,
    24365, 24366, 24367, 24368, 24369, 24370, 24371, 24372,
    24374, 24375, 24376, 24377, 24378, 24379, 24380, 24381,
    24382, 24383, 24384, 24385, 24386, 24387, 24389, 24390,
    24391, 24392, 24393, 24394, 24395, 24396, 24397, 24398,
    24399, 24400, 24401, 24403, 24404, 24405, 24406, 24407,
    24408, 24409, 24410, 24411, 24412, 24413, 24414, 24415,
    24416, 24418, 24419, 24420, 24421, 24422, 24423, 24424,
    24425, 24426, 24427, 24428, 24429, 24430, 24432, 24433,
    24434, 24435, 24436, 24437, 24438, 24439, 24440, 24441,
    24442, 24443, 24444, 24445, 24447, 24448, 24449, 24450,
    24451, 24452, 24453, 24454, 24455, 24456, 24457, 24458,
    24459, 24461, 24462, 24463, 24464, 24465, 24466, 24467,
    24468, 24469, 24470, 24471, 24472, 24473, 24474, 24476,
    24477, 24478, 24479, 24480, 24481, 24482, 24483, 24484,
    24485, 24486, 24487, 24488, 24490, 24491, 24492, 24493,
    24494, 24495, 24496, 24497, 24498, 24499, 24500, 24501,
    24502, 24503, 24505, 24506, 24507, 24508, 24509, 24510,
    24511, 24512, 24513, 24514, 24515, 24516, 24517, 24519,
    24520, 24521, 24522, 24523, 24524, 24525, 24526, 24527,
    24528, 24529, 24530, 24531, 24532, 24534, 24535, 24536,
    24537, 24538, 24539, 24540, 24541, 24542, 24543, 24544,
    24545, 24546, 24548, 24549, 24550, 24551, 24552, 24553,
    24554, 24555, 24556, 24557, 24558, 24559, 24560, 24561,
    24563, 24564, 24565, 24566, 24567, 24568, 24569, 24570,
    24571, 24572, 24573, 24574, 24575, 24577, 24578, 24579,
    24580, 24581, 24582, 24583, 24584, 24585, 24586, 24587,
    24588, 24589, 24591, 24592, 24593, 24594, 24595, 24596,
    24597, 24598, 24599, 24600, 24601, 24602, 24603, 24604,
    24606, 24607, 24608, 24609, 24610, 24611, 24612, 24613,
    24614, 24615, 24616, 24617, 24618, 24620, 24621, 24622,
    24623, 24624, 24625, 24626, 24627, 24628, 24629, 24630,
    24631, 24632, 24634, 24635, 24636, 24637, 24638, 24639,
    24640, 24641, 24642, 24643, 24644, 24645, 24646, 24647,
    24649, 24650, 24651, 24652, 24653, 24654, 24655, 24656,
    24657, 24658, 24659, 24660, 24661, 24663, 24664, 24665,
    24666, 24667, 24668, 24669, 24670, 24671, 24672, 24673,
    24674, 24675, 24677, 24678, 24679, 24680, 24681, 24682,
    24683, 24684, 24685, 24686, 24687, 24688, 24689, 24690,
    24692, 24693, 24694, 24695, 24696, 24697, 24698, 24699,
    24700, 24701, 24702, 24703, 24704, 24706, 24707, 24708,
    24709, 24710, 24711, 24712, 24713, 24714, 24715, 24716,
    24717, 24718, 24720, 24721, 24722, 24723, 24724, 24725,
    24726, 24727, 24728, 24729, 24730, 24731, 24732, 24734,
    24735, 24736, 24737, 24738, 24739, 24740, 24741, 24742,
    24743, 24744, 24745, 24746, 24747, 24749, 24750, 24751,
    24752, 24753, 24754, 24755, 24756, 24757, 24758, 24759,
    24760, 24761, 24763, 24764, 24765, 24766, 24767, 24768,
    24769, 24770, 24771, 24772, 24773, 24774, 24775, 24777,
    24778, 24779, 24780, 24781, 24782, 24783, 24784, 24785,
    24786, 24787, 24788, 24789, 24791, 24792, 24793, 24794,
    24795, 24796, 24797, 24798, 24799, 24800, 24801, 24802,
    24803, 24805, 24806, 24807, 24808, 24809, 24810, 24811,
    24812, 24813, 24814, 24815, 24816, 24817, 24819, 24820,
    24821, 24822, 24823, 24824, 24825, 24826, 24827, 24828,
    24829, 24830, 24831, 24833, 24834, 24835, 24836, 24837,
    24838, 24839, 24840, 24841, 24842, 24843, 24844, 24845,
    24847, 24848, 24849, 24850, 24851, 24852, 24853, 24854,
    24855, 24856, 24857, 24858, 24859, 24860, 24862, 24863,
    24864, 24865, 24866, 24867, 24868, 24869, 24870, 24871,
    24872, 24873, 24874, 24876, 24877, 24878, 24879, 24880,
    24881, 24882, 24883, 24884, 24885, 24886, 24887, 24888,
    24890, 24891, 24892, 24893, 24894, 24895, 24896, 24897,
    24898, 24899, 24900, 24901, 24902, 24904, 24905, 24906,
    24907, 24908, 24909, 24910, 24911, 24912, 24913, 24914,
    24915, 24916, 24918, 24919, 24920, 24921, 24922, 24923,
    24924, 24925, 24926, 24927, 24928, 24929, 24930, 24932,
    24933, 24934, 24935, 24936, 24937, 24938, 24939, 24940,
    24941, 24942, 24943, 24944, 24946, 24947, 24948, 24949,
    24950, 24951, 24952, 24953, 24954, 24955, 24956, 24957,
    24958, 24960, 24961, 24962, 24963, 24964, 24965, 24966,
    24967, 24968, 24969, 24970, 24971, 24972, 24974, 24975,
    24976, 24977, 24978, 24979, 24980, 24981, 24982, 24983,
    24984, 24985, 24986, 24988, 24989, 24990, 24991, 24992,
    24993, 24994, 24995, 24996, 24997, 24998, 24999, 25001,
    25002, 25003, 25004, 25005, 25006, 25007, 25008, 25009,
    25010, 25011, 25012, 25013, 25015, 25016, 25017, 25018,
    25019, 25020, 25021, 25022, 25023, 25024, 25025, 25026,
    25027, 25029, 25030, 25031, 25032, 25033, 25034, 25035,
    25036, 25037, 25038, 25039, 25040, 25041, 25043, 25044,
    25045, 25046, 25047, 25048, 25049, 25050, 25051, 25052,
    25053, 25054, 25055, 25057, 25058, 25059, 25060, 25061,
    25062, 25063, 25064, 25065, 25066, 25067, 25068, 25069,
    25071, 25072, 25073, 25074, 25075, 25076, 25077, 25078,
    25079, 25080, 25081, 25082, 25083, 25085, 25086, 25087,
    25088, 25089, 25090, 25091, 25092, 25093, 25094, 25095,
    25096, 25098, 25099, 25100, 25101, 25102, 25103, 25104,
    25105, 25106, 25107, 25108, 25109, 25110, 25112, 25113,
    25114, 25115, 25116, 25117, 25118, 25119, 25120, 25121,
    25122, 25123, 25124, 25126, 25127, 25128, 25129, 25130,
    25131, 25132, 25133, 25134, 25135, 25136, 25137, 25138,
    25140, 25141, 25142, 25143, 25144, 25145, 25146, 25147,
    25148, 25149, 25150, 25151, 25152, 25154, 25155, 25156,
    25157, 25158, 25159, 25160, 25161, 25162, 25163, 25164,
    25165, 25167, 25168, 25169, 25170, 25171, 25172, 25173,
    25174, 25175, 25176, 25177, 25178, 25179, 25181, 25182,
    25183, 25184, 25185, 25186, 25187, 25188, 25189, 25190,
    25191, 25192, 25193, 25195, 25196, 25197, 25198, 25199,
    25200, 25201, 25202, 25203, 25204, 25205, 25206, 25208,
    25209, 25210, 25211, 25212, 25213, 25214, 25215, 25216,
    25217, 25218, 25219, 25220, 25222, 25223, 25224, 25225,
    25226, 25227, 25228, 25229, 25230, 25231, 25232, 25233,
    25234, 25236, 25237, 25238, 25239, 25240, 25241, 25242,
    25243, 25244, 25245, 25246, 25247, 25249, 25250, 25251,
    25252, 25253, 25254, 25255, 25256, 25257, 25258, 25259,
    25260, 25261, 25263, 25264, 25265, 25266, 25267, 25268,
    25269, 25270, 25271, 25272, 25273, 25274, 25275, 25277,
    25278, 25279, 25280, 25281, 25282, 25283, 25284, 25285,
    25286, 25287, 25288, 25290, 25291, 25292, 25293, 25294,
    25295, 25296, 25297, 25298, 25299, 25300, 25301, 25302,
    25304, 25305, 25306, 25307, 25308, 25309, 25310, 25311,
    25312, 25313, 25314, 25315, 25317, 25318, 25319, 25320,
    25321, 25322, 25323, 25324, 25325, 25326, 25327, 25328,
    25329, 25331, 25332, 25333, 25334, 25335, 25336, 25337,
    25338, 25339, 25340, 25341, 25342, 25343, 25345, 25346,
    25347, 25348, 25349, 25350, 25351, 25352, 25353, 25354,
    25355, 25356, 25358, 25359, 25360, 25361, 25362, 25363,
    25364, 25365, 25366, 25367, 25368, 25369, 25370, 25372,
    25373, 25374, 25375, 25376, 25377, 25378, 25379, 25380,
    25381, 25382, 25383, 25385, 25386, 25387, 25388, 25389,
    25390, 25391, 25392, 25393, 25394, 25395, 25396, 25397,
    25399, 25400, 25401, 25402, 25403, 25404, 25405, 25406,
    25407, 25408, 25409, 25410, 25412, 25413, 25414, 25415,
    25416, 25417, 25418, 25419, 25420, 25421, 25422, 25423,
    25424, 25426, 25427, 25428, 25429, 25430, 25431, 25432,
    25433, 25434, 25435, 25436, 25437, 25439, 25440, 25441,
    25442, 25443, 25444, 25445, 25446, 25447, 25448, 25449,
    25450, 25452, 25453, 25454, 25455, 25456, 25457, 25458,
    25459, 25460, 25461, 25462, 25463, 25464, 25466, 25467,
    25468, 25469, 25470, 25471, 25472, 25473, 25474, 25475,
    25476, 25477, 25479, 25480, 25481, 25482, 25483, 25484,
    25485, 25486, 25487, 25488, 25489, 25490, 25491, 25493,
    25494, 25495, 25496, 25497, 25498, 25499, 25500, 25501,
    25502, 25503, 25504, 25506, 25507, 25508, 25509, 25510,
    25511, 25512, 25513, 25514, 25515, 25516, 25517, 25519,
    25520, 25521, 25522, 25523, 25524, 25525, 25526, 25527,
    25528, 25529, 25530, 25531, 25533, 25534, 25535, 25536,
    25537, 25538, 25539, 25540, 25541, 25542, 25543, 25544,
    25546, 25547, 25548, 25549, 25550, 25551, 25552, 25553,
    25554, 25555, 25556, 25557, 25559, 25560, 25561, 25562,
    25563, 25564, 25565, 25566, 25567, 25568, 25569, 25570,
    25571, 25573, 25574, 25575, 25576, 25577, 25578, 25579,
    25580, 25581, 25582, 25583, 25584, 25586, 25587, 25588,
    25589, 25590, 25591, 25592, 25593, 25594, 25595, 25596,
    25597, 25599, 25600, 25601, 25602, 25603, 25604, 25605,
    25606, 25607, 25608, 25609, 25610, 25611, 25613, 25614,
    25615, 25616, 25617, 25618, 25619, 25620, 25621, 25622,
    25623, 25624, 25626, 25627, 25628, 25629, 25630, 25631,
    25632, 25633, 25634, 25635, 25636, 25637, 25639, 25640,
    25641, 25642, 25643, 25644, 25645, 25646, 25647, 25648,
    25649, 25650, 25652, 25653, 25654, 25655, 25656, 25657,
    25658, 25659, 25660, 25661, 25662, 25663, 25665, 25666,
    25667, 25668, 25669, 25670, 25671, 25672, 25673, 25674,
    25675, 25676, 25677, 25679, 25680, 25681, 25682, 25683,
    25684, 25685, 25686, 25687, 25688, 25689, 25690, 25692,
    25693, 25694, 25695, 25696, 25697, 25698, 25699, 25700,
    25701, 25702, 25703, 25705, 25706, 25707, 25708, 25709,
    25710, 25711, 25712, 25713, 25714, 25715, 25716, 25718,
    25719, 25720, 25721, 25722, 25723, 25724, 25725, 25726,
    25727, 25728, 25729, 25731, 25732, 25733, 25734, 25735,
    25736, 25737, 25738, 25739, 25740, 25741, 25742, 25744,
    25745, 25746, 25747, 25748, 25749, 25750, 25751, 25752,
    25753, 25754, 25755, 25756, 25758, 25759, 25760, 25761,
    25762, 25763, 25764, 25765, 25766, 25767, 25768, 25769,
    25771, 25772, 25773, 25774, 25775, 25776, 25777, 25778,
    25779, 25780, 25781, 25782, 25784, 25785, 25786, 25787,
    25788, 25789, 25790, 25791, 25792, 25793, 25794, 25795,
    25797, 25798, 25799, 25800, 25801, 25802, 25803, 25804,
    25805, 25806, 25807, 25808, 25810, 25811, 25812, 25813,
    25814, 25815, 25816, 25817, 25818, 25819, 25820, 25821,
    25823, 25824, 25825, 25826, 25827, 25828, 25829, 25830,
    25831, 25832, 25833, 25834, 25836, 25837, 25838, 25839,
    25840, 25841, 25842, 25843, 25844, 25845, 25846, 25847,
    25849, 25850, 25851, 25852, 25853, 25854, 25855, 25856,
    25857, 25858, 25859, 25860, 25862, 25863, 25864, 25865,
    25866, 25867, 25868, 25869, 25870, 25871, 25872, 25873,
    25875, 25876, 25877, 25878, 25879, 25880, 25881, 25882,
    25883, 25884, 25885, 25886, 25888, 25889, 25890, 25891,
    25892, 25893, 25894, 25895, 25896, 25897, 25898, 25899,
    25901, 25902, 25903, 25904, 25905, 25906, 25907, 25908,
    25909, 25910, 25911, 25912, 25914, 25915, 25916, 25917,
    25918, 25919, 25920, 25921, 25922, 25923, 25924, 25925,
    25927, 25928, 25929, 25930, 25931, 25932, 25933, 25934,
    25935, 25936, 25937, 25938, 25940, 25941, 25942, 25943,
    25944, 25945, 25946, 25947, 25948, 25949, 25950, 25951,
    25953, 25954, 25955, 25956, 25957, 25958, 25959, 25960,
    25961, 25962, 25963, 25964, 25966, 25967, 25968, 25969,
    25970, 25971, 25972, 25973, 25974, 25975, 25976, 25977,
    25979, 25980, 25981, 25982, 25983, 25984, 25985, 25986,
    25987, 25988, 25989, 25990, 25992, 25993, 25994, 25995,
    25996, 25997, 25998, 25999, 26000, 26001, 26002, 26004,
    26005, 26006, 26007, 26008, 26009, 26010, 26011, 26012,
    26013, 26014, 26015, 26017, 26018, 26019, 26020, 26021,
    26022, 26023, 26024, 26025, 26026, 26027, 26028, 26030,
    26031, 26032, 26033, 26034, 26035, 26036, 26037, 26038,
    26039, 26040, 26041, 26043, 26044, 26045, 26046, 26047,
    26048, 26049, 26050, 26051, 26052, 26053, 26054, 26056,
    26057, 26058, 26059, 26060, 26061, 26062, 26063, 26064,
    26065, 26066, 26067, 26069, 26070, 26071, 26072, 26073,
    26074, 26075, 26076, 26077, 26078, 26079, 26081, 26082,
    26083, 26084, 26085, 26086, 26087, 26088, 26089, 26090,
    26091, 26092, 26094, 26095, 26096, 26097, 26098, 26099,
    26100, 26101, 26102, 26103, 26104, 26105, 26107, 26108,
    26109, 26110, 26111, 26112, 26113, 26114, 26115, 26116,
    26117, 26118, 26120, 26121, 26122, 26123, 26124, 26125,
    26126, 26127, 26128, 26129, 26130, 26131, 26133, 26134,
    26135, 26136, 26137, 26138, 26139, 26140, 26141, 26142,
    26143, 26145, 26146, 26147, 26148, 26149, 26150, 26151,
    26152, 26153, 26154, 26155, 26156, 26158, 26159, 26160,
    26161, 26162, 26163, 26164, 26165, 26166, 26167, 26168,
    26169, 26171, 26172, 26173, 26174, 26175, 26176, 26177,
    26178, 26179, 26180, 26181, 26183, 26184, 26185, 26186,
    26187, 26188, 26189, 26190, 26191, 26192, 26193, 26194,
    26196, 26197, 26198, 26199, 26200, 26201, 26202, 26203,
    26204, 26205, 26206, 26207, 26209, 26210, 26211, 26212,
    26213, 26214, 26215, 26216, 26217, 26218, 26219, 26221,
    26222, 26223, 26224, 26225, 26226, 26227, 26228, 26229,
    26230, 26231, 26232, 26234, 26235, 26236, 26237, 26238,
    26239, 26240, 26241, 26242, 26243, 26244, 26245, 26247,
    26248, 26249, 26250, 26251, 26252, 26253, 26254, 26255,
    26256, 26257, 26259, 26260, 26261, 26262, 26263, 26264,
    26265, 26266, 26267, 26268, 26269, 26270, 26272, 26273,
    26274, 26275, 26276, 26277, 26278, 26279, 26280, 26281,
    26282, 26283, 26285, 26286, 26287, 26288, 26289, 26290,
    26291, 26292, 26293, 26294, 26295, 26297, 26298, 26299,
    26300, 26301, 26302, 26303, 26304, 26305, 26306, 26307,
    26308, 26310, 26311, 26312, 26313, 26314, 26315, 26316,
    26317, 26318, 26319, 26320, 26322, 26323, 26324, 26325,
    26326, 26327, 26328, 26329, 26330, 26331, 26332, 26333,
    26335, 26336, 26337, 26338, 26339, 26340, 26341, 26342,
    26343, 26344, 26345, 26346, 26348, 26349, 26350, 26351,
    26352, 26353, 26354, 26355, 26356, 26357, 26358, 26360,
    26361, 26362, 26363, 26364, 26365, 26366, 26367, 26368,
    26369, 26370, 26371, 26373, 26374, 26375, 26376, 26377,
    26378, 26379, 26380, 26381, 26382, 26383, 26385, 26386,
    26387, 26388, 26389, 26390, 26391, 26392, 26393, 26394,
    26395, 26396, 26398, 26399, 26400, 26401, 26402, 26403,
    26404, 26405, 26406, 26407, 26408, 26410, 26411, 26412,
    26413, 26414, 26415, 26416, 26417, 26418, 26419, 26420,
    26421, 26423, 26424, 26425, 26426, 26427, 26428, 26429,
    26430, 26431, 26432, 26433, 26435, 26436, 26437, 26438,
    26439, 26440, 26441, 26442, 26443, 26444, 26445, 26447,
    26448, 26449, 26450, 26451, 26452, 26453, 26454, 26455,
    26456, 26457, 26458, 26460, 26461, 26462, 26463, 26464,
    26465, 26466, 26467, 26468, 26469, 26470, 26472, 26473,
    26474, 26475, 26476, 26477, 26478, 26479, 26480, 26481,
    26482, 26483, 26485, 26486, 26487, 26488, 26489, 26490,
    26491, 26492, 26493, 26494, 26495, 26497, 26498, 26499,
    26500, 26501, 26502, 26503, 26504, 26505, 26506, 26507,
    26508, 26510, 26511, 26512, 26513, 26514, 26515, 26516,
    26517, 26518, 26519, 26520, 26522, 26523, 26524, 26525,
    26526, 26527, 26528, 26529, 26530, 26531, 26532, 26534,
    26535, 26536, 26537, 26538, 26539, 26540, 26541, 26542,
    26543, 26544, 26545, 26547, 26548, 26549, 26550, 26551,
    26552, 26553, 26554, 26555, 26556, 26557, 26559, 26560,
    26561, 26562, 26563, 26564, 26565, 26566, 26567, 26568,
    26569, 26571, 26572, 26573, 26574, 26575, 26576, 26577,
    26578, 26579, 26580, 26581, 26582, 26584, 26585, 26586,
    26587, 26588, 26589, 26590, 26591, 26592, 26593, 26594,
    26596, 26597, 26598, 26599, 26600, 26601, 26602, 26603,
    26604, 26605, 26606, 26608, 26609, 26610, 26611, 26612,
    26613, 26614, 26615, 26616, 26617, 26618, 26619, 26621,
    26622, 26623, 26624, 26625, 26626, 26627, 26628, 26629,
    26630, 26631, 26633, 26634, 26635, 26636, 26637, 26638,
    26639, 26640, 26641, 26642, 26643, 26645, 26646, 26647,
    26648, 26649, 26650, 26651, 26652, 26653, 26654, 26655,
    26657, 26658, 26659, 26660, 26661, 26662, 26663, 26664,
    26665, 26666, 26667, 26668, 26670, 26671, 26672, 26673,
    26674, 26675, 26676, 26677, 26678, 26679, 26680, 26682,
    26683, 26684, 26685, 26686, 26687, 26688, 26689, 26690,
    26691, 26692, 26694, 26695, 26696, 26697, 26698, 26699,
    26700, 26701, 26702, 26703, 26704, 26706, 26707, 26708,
    26709, 26710, 26711, 26712, 26713, 26714, 26715, 26716,
    26717, 26719, 26720, 26721, 26722, 26723, 26724, 26725,
    26726, 26727, 26728, 26729, 26731, 26732, 26733, 26734,
    26735, 26736, 26737, 26738, 26739, 26740, 26741, 26743,
    26744, 26745, 26746, 26747, 26748, 26749, 26750, 26751,
    26752, 26753, 26755, 26756, 26757, 26758, 26759, 26760,
    26761, 26762, 26763, 26764, 26765, 26767, 26768, 26769,
    26770, 26771, 26772, 26773, 26774, 26775, 26776, 26777,
    26779, 26780, 26781, 26782, 26783, 26784, 26785, 26786,
    26787, 26788, 26789, 26790, 26792, 26793, 26794, 26795,
    26796, 26797, 26798, 26799, 26800, 26801, 26802, 26804,
    26805, 26806, 26807, 26808, 26809, 26810, 26811, 26812,
    26813, 26814, 26816, 26817, 26818, 26819, 26820, 26821,
    26822, 26823, 26824, 26825, 26826, 26828, 26829, 26830,
    26831, 26832, 26833, 26834, 26835, 26836, 26837, 26838,
    26840, 26841, 26842, 26843, 26844, 26845, 26846, 26847,
    26848, 26849, 26850, 26852, 26853, 26854, 26855, 26856,
    26857, 26858, 26859, 26860, 26861, 26862, 26864, 26865,
    26866, 26867, 26868, 26869, 26870, 26871, 26872, 26873,
    26874, 26876, 26877, 26878, 26879, 26880, 26881, 26882,
    26883, 26884, 26885, 26886, 26888, 26889, 26890, 26891,
    26892, 26893, 26894, 26895, 26896, 26897, 26898, 26900,
    26901, 26902, 26903, 26904, 26905, 26906, 26907, 26908,
    26909, 26910, 26912, 26913, 26914, 26915, 26916, 26917,
    26918, 26919, 26920, 26921, 26922, 26924, 26925, 26926,
    26927, 26928, 26929, 26930, 26931, 26932, 26933, 26934,
    26936, 26937, 26938, 26939, 26940, 26941, 26942, 26943,
    26944, 26945, 26946, 26948, 26949, 26950, 26951, 26952,
    26953, 26954, 26955, 26956, 26957, 26958, 26960, 26961,
    26962, 26963, 26964, 26965, 26966, 26967, 26968, 26969,
    26970, 26972, 26973, 26974, 26975, 26976, 26977, 26978,
    26979, 26980, 26981, 26982, 26984, 26985, 26986, 26987,
    26988, 26989, 26990, 26991, 26992, 26993, 26994, 26996,
    26997, 26998, 26999, 27000, 27001, 27002, 27003, 27004,
    27005, 27006, 27008, 27009, 27010, 27011, 27012, 27013,
    27014, 27015, 27016, 27017, 27018, 27020, 27021, 27022,
    27023, 27024, 27025, 27026, 27027, 27028, 27029, 27030,
    27032, 27033, 27034, 27035, 27036, 27037, 27038, 27039,
    27040, 27041, 27042, 27044, 27045, 27046, 27047, 27048,
    27049, 27050, 27051, 27052, 27053, 27054, 27056, 27057,
    27058, 27059, 27060, 27061, 27062, 27063, 27064, 27065,
    27066, 27068, 27069, 27070, 27071, 27072, 27073, 27074,
    27075, 27076, 27077, 27078, 27080, 27081, 27082, 27083,
    27084, 27085, 27086, 27087, 27088, 27089, 27090, 27092,
    27093, 27094, 27095, 27096, 27097, 27098, 27099, 27100,
    27101, 27102, 27104, 27105, 27106, 27107, 27108, 27109,
    27110, 27111, 27112, 27113, 27115, 27116, 27117, 27118,
    27119, 27120, 27121, 27122, 27123, 27124, 27125, 27127,
    27128, 27129, 27130, 27131, 27132, 27133, 27134, 27135,
    27136, 27137, 27139, 27140, 27141, 27142, 27143, 27144,
    27145, 27146, 27147, 27148, 27149, 27151, 27152, 27153,
    27154, 27155, 27156, 27157, 27158, 27159, 27160, 27161,
    27163, 27164, 27165, 27166, 27167, 27168, 27169, 27170,
    27171, 27172, 27173, 27175, 27176, 27177, 27178, 27179,
    27180, 27181, 27182, 27183, 27184, 27186, 27187, 27188,
    27189, 27190, 27191, 27192, 27193, 27194, 27195, 27196,
    27198, 27199, 27200, 27201, 27202, 27203, 27204, 27205,
    27206, 27207, 27208, 27210, 27211, 27212, 27213, 27214,
    27215, 27216, 27217, 27218, 27219, 27220, 27222, 27223,
    27224, 27225, 27226, 27227, 27228, 27229, 27230, 27231,
    27233, 27234, 27235, 27236, 27237, 27238, 27239, 27240,
    27241, 27242, 27243, 27245, 27246, 27247, 27248, 27249,
    27250, 27251, 27252, 27253, 27254, 27255, 27257, 27258,
    27259, 27260, 27261, 27262, 27263, 27264, 27265, 27266,
    27267, 27269, 27270, 27271, 27272, 27273, 27274, 27275,
    27276, 27277, 27278, 27280, 27281, 27282, 27283, 27284,
    27285, 27286, 27287, 27288, 27289, 27290, 27292, 27293,
    27294, 27295, 27296, 27297, 27298, 27299, 27300, 27301,
    27302, 27304, 27305, 27306, 27307, 27308, 27309, 27310,
    27311, 27312, 27313, 27315, 27316, 27317, 27318, 27319,
    27320, 27321, 27322, 27323, 27324, 27325, 27327, 27328,
    27329, 27330, 27331, 27332, 27333, 27334, 27335, 27336,
    27337, 27339, 27340, 27341, 27342, 27343, 27344, 27345,
    27346, 27347, 27348, 27350, 27351, 27352, 27353, 27354,
    27355, 27356, 27357, 27358, 27359, 27360, 27362, 27363,
    27364, 27365, 27366, 27367, 27368, 27369, 27370, 27371,
    27372, 27374, 27375, 27376, 27377, 27378, 27379, 27380,
    27381, 27382, 27383, 27385, 27386, 27387, 27388, 27389,
    27390, 27391, 27392, 27393, 27394, 27395, 27397, 27398,
    27399, 27400, 27401, 27402, 27403, 27404, 27405, 27406,
    27407, 27409, 27410, 27411, 27412, 27413, 27414, 27415,
    27416, 27417, 27418, 27420, 27421, 27422, 27423, 27424,
    27425, 27426, 27427, 27428, 27429, 27430, 27432, 27433,
    27434, 27435, 27436, 27437, 27438, 27439, 27440, 27441,
    27443, 27444, 27445, 27446, 27447, 27448, 27449, 27450,
    27451, 27452, 27453, 27455, 27456, 27457, 27458, 27459,
    27460, 27461, 27462, 27463, 27464, 27466, 27467, 27468,
    27469, 27470, 27471, 27472, 27473, 27474, 27475, 27476,
    27478, 27479, 27480, 27481, 27482, 27483, 27484, 27485,
    27486, 27487, 27488, 27490, 27491, 27492, 27493, 27494,
    27495, 27496, 27497, 27498, 27499, 27501, 27502, 27503,
    27504, 27505, 27506, 27507, 27508, 27509, 27510, 27511,
    27513, 27514, 27515, 27516, 27517, 27518, 27519, 27520,
    27521, 27522, 27524, 27525, 27526, 27527, 27528, 27529,
    27530, 27531, 27532, 27533, 27534, 27536, 27537, 27538,
    27539, 27540, 27541, 27542, 27543, 27544, 27545, 27547,
    27548, 27549, 27550, 27551, 27552, 27553, 27554, 27555,
    27556, 27557, 27559, 27560, 27561, 27562, 27563, 27564,
    27565, 27566, 27567, 27568, 27570, 27571, 27572, 27573,
    27574, 27575, 27576, 27577, 27578, 27579, 27580, 27582,
    27583, 27584, 27585, 27586, 27587, 27588, 27589, 27590,
    27591, 27593, 27594, 27595, 27596, 27597, 27598, 27599,
    27600, 27601, 27602, 27604, 27605, 27606, 27607, 27608,
    27609, 27610, 27611, 27612, 27613, 27614, 27616, 27617,
    27618, 27619, 27620, 27621, 27622, 27623, 27624, 27625,
    27627, 27628, 27629, 27630, 27631, 27632, 27633, 27634,
    27635, 27636, 27637, 27639, 27640, 27641, 27642, 27643,
    27644, 27645, 27646, 27647, 27648, 27650, 27651, 27652,
    27653, 27654, 27655, 27656, 27657, 27658, 27659, 27660,
    27662, 27663, 27664, 27665, 27666, 27667, 27668, 27669,
    27670, 27671, 27673, 27674, 27675, 27676, 27677, 27678,
    27679, 27680, 27681, 27682, 27684, 27685, 27686, 27687,
    27688, 27689, 27690, 27691, 27692, 27693, 27694, 27696,
    27697, 27698, 27699, 27700, 27701, 27702, 27703, 27704,
    27705, 27707, 27708, 27709, 27710, 27711, 27712, 27713,
    27714, 27715, 27716, 27718, 27719, 27720, 27721, 27722,
    27723, 27724, 27725, 27726, 27727, 27728, 27730, 27731,
    27732, 27733, 27734, 27735, 27736, 27737, 27738, 27739,
    27741, 27742, 27743, 27744, 27745, 27746, 27747, 27748,
    27749, 27750, 27752, 27753, 27754, 27755, 27756, 27757,
    27758, 27759, 27760, 27761, 27762, 27764, 27765, 27766,
    27767, 27768, 27769, 27770, 27771, 27772, 27773, 27775,
    27776, 27777, 27778, 27779, 27780, 27781, 27782, 27783,
    27784, 27786, 27787, 27788, 27789, 27790, 27791, 27792,
    27793, 27794, 27795, 27796, 27798, 27799, 27800, 27801,
    27802, 27803, 27804, 27805, 27806, 27807, 27809, 27810,
    27811, 27812, 27813, 27814, 27815, 27816, 27817, 27818,
    27820, 27821, 27822, 27823, 27824, 27825, 27826, 27827,
    27828, 27829, 27831, 27832, 27833, 27834, 27835, 27836,
    27837, 27838, 27839, 27840, 27841, 27843, 27844, 27845,
    27846, 27847, 27848, 27849, 27850, 27851, 27852, 27854,
    27855, 27856, 27857, 27858, 27859, 27860, 27861, 27862,
    27863, 27865, 27866, 27867, 27868, 27869, 27870, 27871,
    27872, 27873, 27874, 27876, 27877, 27878, 27879, 27880,
    27881, 27882, 27883, 27884, 27885, 27886, 27888, 27889,
    27890, 27891, 27892, 27893, 27894, 27895, 27896, 27897,
    27899, 27900, 27901, 27902, 27903, 27904, 27905, 27906,
    27907, 27908, 27910, 27911, 27912, 27913, 27914, 27915,
    27916, 27917, 27918, 27919, 27921, 27922, 27923, 27924,
    27925, 27926, 27927, 27928, 27929, 27930, 27932, 27933,
    27934, 27935, 27936, 27937, 27938, 27939, 27940, 27941,
    27942, 27944, 27945, 27946, 27947, 27948, 27949, 27950,
    27951, 27952, 27953, 27955, 27956, 27957, 27958, 27959,
    27960, 27961, 27962, 27963, 27964, 27966, 27967, 27968,
    27969, 27970, 27971, 27972, 27973, 27974, 27975, 27977,
    27978, 27979, 27980, 27981, 27982, 27983, 27984, 27985,
    27986, 27988, 27989, 27990, 27991, 27992, 27993, 27994,
    27995, 27996, 27997, 27999, 28000, 28001, 28002, 28003,
    28004, 28005, 28006, 28007, 28008, 28010, 28011, 28012,
    28013, 28014, 28015, 28016, 28017, 28018, 28019, 28020,
    28022, 28023, 28024, 28025, 28026, 28027, 28028, 28029,
    28030, 28031, 28033, 28034, 28035, 28036, 28037, 28038,
    28039, 28040, 28041, 28042, 28044, 28045, 28046, 28047,
    28048, 28049, 28050, 28051, 28052, 28053, 28055, 28056,
    28057, 28058, 28059, 28060, 28061, 28062, 28063, 28064,
    28066, 28067, 28068, 28069, 28070, 28071, 28072, 28073,
    28074, 28075, 28077, 28078, 28079, 28080, 28081, 28082,
    28083, 28084, 28085, 28086, 28088, 28089, 28090, 28091,
    28092, 28093, 28094, 28095, 28096, 28097, 28099, 28100,
    28101, 28102, 28103, 28104, 28105, 28106, 28107, 28108,
    28110, 28111, 28112, 28113, 28114, 28115, 28116, 28117,
    28118, 28119, 28121, 28122, 28123, 28124, 28125, 28126,
    28127, 28128, 28129, 28130, 28132, 28133, 28134, 28135,
    28136, 28137, 28138, 28139, 28140, 28141, 28143, 28144,
    28145, 28146, 28147, 28148, 28149, 28150, 28151, 28152,
    28154, 28155, 28156, 28157, 28158, 28159, 28160, 28161,
    28162, 28163, 28165, 28166, 28167, 28168, 28169, 28170,
    28171, 28172, 28173, 28174, 28176, 28177, 28178, 28179,
    28180, 28181, 28182, 28183, 28184, 28185, 28187, 28188,
    28189, 28190, 28191, 28192, 28193, 28194, 28195, 28196,
    28198, 28199, 28200, 28201, 28202, 28203, 28204, 28205,
    28206, 28207, 28209, 28210, 28211, 28212, 28213, 28214,
    28215, 28216, 28217, 28218, 28220, 28221, 28222, 28223,
    28224, 28225, 28226, 28227, 28228, 28229, 28231, 28232,
    28233, 28234, 28235, 28236, 28237, 28238, 28239, 28240,
    28242, 28243, 28244, 28245, 28246, 28247, 28248, 28249,
    28250, 28251, 28253, 28254, 28255, 28256, 28257, 28258,
    28259, 28260, 28261, 28262, 28264, 28265, 28266, 28267,
    28268, 28269, 28270, 28271, 28272, 28273, 28275, 28276,
    28277, 28278, 28279, 28280, 28281, 28282, 28283, 28284,
    28286, 28287, 28288, 28289, 28290, 28291, 28292, 28293,
    28294, 28295, 28297, 28298, 28299, 28300, 28301, 28302,
    28303, 28304, 28305, 28307, 28308, 28309, 28310, 28311,
    28312, 28313, 28314, 28315, 28316, 28318, 28319, 28320,
    28321, 28322, 28323, 28324, 28325, 28326, 28327, 28329,
    28330, 28331, 28332, 28333, 28334, 28335, 28336, 28337,
    28338, 28340, 28341, 28342, 28343, 28344, 28345, 28346,
    28347, 28348, 28349, 28351, 28352, 28353, 28354, 28355,
    28356, 28357, 28358, 28359, 28360, 28362, 28363, 28364,
    28365, 28366, 28367, 28368, 28369, 28370, 28371, 28373,
    28374, 28375, 28376, 28377, 28378, 28379, 28380, 28381,
    28383, 28384, 28385, 28386, 28387, 28388, 28389, 28390,
    28391, 28392, 28394, 28395, 28396, 28397, 28398, 28399,
    28400, 28401, 28402, 28403, 28405, 28406, 28407, 28408,
    28409, 28410, 28411, 28412, 28413, 28414, 28416, 28417,
    28418, 28419, 28420, 28421, 28422, 28423, 28424, 28425,
    28427, 28428, 28429, 28430, 28431, 28432, 28433, 28434,
    28435, 28436, 28438, 28439, 28440, 28441, 28442, 28443,
    28444, 28445, 28446, 28448, 28449, 28450, 28451, 28452,
    28453, 28454, 28455, 28456, 28457, 28459, 28460, 28461,
    28462, 28463, 28464, 28465, 28466, 28467, 28468, 28470,
    28471, 28472, 28473, 28474, 28475, 28476, 28477, 28478,
    28479, 28481, 28482, 28483, 28484, 28485, 28486, 28487,
    28488, 28489, 28491, 28492, 28493, 28494, 28495, 28496,
    28497, 28498, 28499, 28500, 28502, 28503, 28504, 28505,
    28506, 28507, 28508, 28509, 28510, 28511, 28513, 28514,
    28515, 28516, 28517, 28518, 28519, 28520, 28521, 28522,
    28524, 28525, 28526, 28527, 28528, 28529, 28530, 28531,
    28532, 28534, 28535, 28536, 28537, 28538, 28539, 28540,
    28541, 28542, 28543, 28545, 28546, 28547, 28548, 28549,
    28550, 28551, 28552, 28553, 28554, 28556, 28557, 28558,
    28559, 28560, 28561, 28562, 28563, 28564, 28566, 28567,
    28568, 28569, 28570, 28571, 28572, 28573, 28574, 28575,
    28577, 28578, 28579, 28580, 28581, 28582, 28583, 28584,
    28585, 28586, 28588, 28589, 28590, 28591, 28592, 28593,
    28594, 28595, 28596, 28598, 28599, 28600, 28601, 28602,
    28603, 28604, 28605, 28606, 28607, 28609, 28610, 28611,
    28612, 28613, 28614, 28615, 28616, 28617, 28618, 28620,
    28621, 28622, 28623, 28624, 28625, 28626, 28627, 28628,
    28630, 28631, 28632, 28633, 28634, 28635, 28636, 28637,
    28638, 28639, 28641, 28642, 28643, 28644, 28645, 28646,
    28647, 28648, 28649, 28650, 28652, 28653, 28654, 28655,
    28656, 28657, 28658, 28659, 28660, 28662, 28663, 28664,
    28665, 28666, 28667, 28668, 28669, 28670, 28671, 28673,
    28674, 28675, 28676, 28677, 28678, 28679, 28680, 28681,
    28682, 28684, 28685, 28686, 28687, 28688, 28689, 28690,
    28691, 28692, 28694, 28695, 28696, 28697, 28698, 28699,
    28700, 28701, 28702, 28703, 28705, 28706, 28707, 28708,
    28709, 28710, 28711, 28712, 28713, 28715, 28716, 28717,
    28718, 28719, 28720, 28721, 28722, 28723, 28724, 28726,
    28727, 28728, 28729, 28730, 28731, 28732, 28733, 28734,
    28735, 28737, 28738, 28739, 28740, 28741, 28742, 28743,
    28744, 28745, 28747, 28748, 28749, 28750, 28751, 28752,
    28753, 28754, 28755, 28756, 28758, 28759, 28760, 28761,
    28762, 28763, 28764, 28765, 28766, 28768, 28769, 28770,
    28771, 28772, 28773, 28774, 28775, 28776, 28777, 28779,
    28780, 28781, 28782, 28783, 28784, 28785, 28786, 28787,
    28789, 28790, 28791, 28792, 28793, 28794, 28795, 28796,
    28797, 28798, 28800, 28801, 28802, 28803, 28804, 28805,
    28806, 28807, 28808, 28810, 28811, 28812, 28813, 28814,
    28815, 28816, 28817, 28818, 28819, 28821, 28822, 28823,
    28824, 28825, 28826, 28827, 28828, 28829, 28831, 28832,
    28833, 28834, 28835, 28836, 28837, 28838, 28839, 28840,
    28842, 28843, 28844, 28845, 28846, 28847, 28848, 28849,
    28850, 28852, 28853, 28854, 28855, 28856, 28857, 28858,
    28859, 28860, 28861, 28863, 28864, 28865, 28866, 28867,
    28868, 28869, 28870, 28871, 28873, 28874, 28875, 28876,
    28877, 28878, 28879, 28880, 28881, 28882, 28884, 28885,
    28886, 28887, 28888, 28889, 28890, 28891, 28892, 28894,
    28895, 28896, 28897, 28898, 28899, 28900, 28901, 28902,
    28903, 28905, 28906, 28907, 28908, 28909, 28910, 28911,
    28912, 28913, 28915, 28916, 28917, 28918, 28919, 28920,
    28921, 28922, 28923, 28924, 28926, 28927, 28928, 28929,
    28930, 28931, 28932, 28933, 28934, 28936, 28937, 28938,
    28939, 28940, 28941, 28942, 28943, 28944, 28946, 28947,
    28948, 28949, 28950, 28951, 28952, 28953, 28954, 28955,
    28957, 28958, 28959, 28960, 28961, 28962, 28963, 28964,
    28965, 28967, 28968, 28969, 28970, 28971, 28972, 28973,
    28974, 28975, 28976, 28978, 28979, 28980, 28981, 28982,
    28983, 28984, 28985, 28986, 28988, 28989, 28990, 28991,
    28992, 28993, 28994, 28995, 28996, 28998, 28999, 29000,
    29001, 29002, 29003, 29004, 29005, 29006, 29007, 29009,
    29010, 29011, 29012, 29013, 29014, 29015, 29016, 29017,
    29019, 29020, 29021, 29022, 29023, 29024, 29025, 29026,
    29027, 29028, 29030, 29031, 29032, 29033, 29034, 29035,
    29036, 29037, 29038, 29040, 29041, 29042, 29043, 29044,
    29045, 29046, 29047, 29048, 29050, 29051, 29052, 29053,
    29054, 29055, 29056, 29057, 29058, 29059, 29061, 29062,
    29063, 29064, 29065, 29066, 29067, 29068, 29069, 29071,
    29072, 29073, 29074, 29075, 29076, 29077, 29078, 29079,
    29081, 29082, 29083, 29084, 29085, 29086, 29087, 29088,
    29089, 29090, 29092, 29093, 29094, 29095, 29096, 29097,
    29098, 29099, 29100, 29102, 29103, 29104, 29105, 29106,
    29107, 29108, 29109, 29110, 29112, 29113, 29114, 29115,
    29116, 29117, 29118, 29119, 29120, 29121, 29123, 29124,
    29125, 29126, 29127, 29128, 29129, 29130, 29131, 29133,
    29134, 29135, 29136, 29137, 29138, 29139, 29140, 29141,
    29143, 29144, 29145, 29146, 29147, 29148, 29149, 29150,
    29151, 29153, 29154, 29155, 29156, 29157, 29158, 29159,
    29160, 29161, 29162, 29164, 29165, 29166, 29167, 29168,
    29169, 29170, 29171, 29172, 29174, 29175, 29176, 29177,
    29178, 29179, 29180, 29181, 29182, 29184, 29185, 29186,
    29187, 29188, 29189, 29190, 29191, 29192, 29194, 29195,
    29196, 29197, 29198, 29199, 29200, 29201, 29202, 29203,
    29205, 29206, 29207, 29208, 29209, 29210, 29211, 29212,
    29213, 29215, 29216, 29217, 29218, 29219, 29220, 29221,
    29222, 29223, 29225, 29226, 29227, 29228, 29229, 29230,
    29231, 29232, 29233, 29235, 29236, 29237, 29238, 29239,
    29240, 29241, 29242, 29243, 29244, 29246, 29247, 29248,
    29249, 29250, 29251, 29252, 29253, 29254, 29256, 29257,
    29258, 29259, 29260, 29261, 29262, 29263, 29264, 29266,
    29267, 29268, 29269, 29270, 29271, 29272, 29273, 29274,
    29276, 29277, 29278, 29279, 29280, 29281, 29282, 29283,
    29284, 29286, 29287, 29288, 29289, 29290, 29291, 29292,
    29293, 29294, 29295, 29297, 29298, 29299, 29300, 29301,
    29302, 29303, 29304, 29305, 29307, 29308, 29309, 29310,
    29311, 29312, 29313, 29314, 29315, 29317, 29318, 29319,
    29320, 29321, 29322, 29323, 29324, 29325, 29327, 29328,
    29329, 29330, 29331, 29332, 29333, 29334, 29335, 29337,
    29338, 29339, 29340, 29341, 29342, 29343, 29344, 29345,
    29347, 29348, 29349, 29350, 29351, 29352, 29353, 29354,
    29355, 29356, 29358, 29359, 29360, 29361, 29362, 29363,
    29364, 29365, 29366, 29368, 29369, 29370, 29371, 29372,
    29373, 29374, 29375, 29376, 29378, 29379, 29380, 29381,
    29382, 29383, 29384, 29385, 29386, 29388, 29389, 29390,
    29391, 29392, 29393, 29394, 29395, 29396, 29398, 29399,
    29400, 29401, 29402, 29403, 29404, 29405, 29406, 29408,
    29409, 29410, 29411, 29412, 29413, 29414, 29415, 29416,
    29418, 29419, 29420, 29421, 29422, 29423, 29424, 29425,
    29426, 29428, 29429, 29430, 29431, 29432, 29433, 29434,
    29435, 29436, 29438, 29439, 29440, 29441, 29442, 29443,
    29444, 29445, 29446, 29448, 29449, 29450, 29451, 29452,
    29453, 29454, 29455, 29456, 29457, 29459, 29460, 29461,
    29462, 29463, 29464, 29465, 29466, 29467, 29469, 29470,
    29471, 29472, 29473, 29474, 29475, 29476, 29477, 29479,
    29480, 29481, 29482, 29483, 29484, 29485, 29486, 29487,
    29489, 29490, 29491, 29492, 29493, 29494, 29495, 29496,
    29497, 29499, 29500, 29501, 29502, 29503, 29504, 29505,
    29506, 29507, 29509, 29510, 29511, 29512, 29513, 29514,
    29515, 29516, 29517, 29519, 29520, 29521, 29522, 29523,
    29524, 29525, 29526, 29527, 29529, 29530, 29531, 29532,
    29533, 29534, 29535, 29536, 29537, 29539, 29540, 29541,
    29542, 29543, 29544, 29545, 29546, 29547, 29549, 29550,
    29551, 29552, 29553, 29554, 29555, 29556, 29557, 29559,
    29560, 29561, 29562, 29563, 29564, 29565, 29566, 29567,
    29569, 29570, 29571, 29572, 29573, 29574, 29575, 29576,
    29577, 29579, 29580, 29581, 29582, 29583, 29584, 29585,
    29586, 29587, 29589, 29590, 29591, 29592, 29593, 29594,
    29595, 29596, 29597, 29599, 29600, 29601, 29602, 29603,
    29604, 29605, 29606, 29607, 29609, 29610, 29611, 29612,
    29613, 29614, 29615, 29616, 29617, 29619, 29620, 29621,
    29622, 29623, 29624, 29625, 29626, 29627, 29629, 29630,
    29631, 29632, 29633, 29634, 29635, 29636, 29637, 29639,
    29640, 29641, 29642, 29643, 29644, 29645, 29646, 29647,
    29649, 29650, 29651, 29652, 29653, 29654, 29655, 29656,
    29657, 29659, 29660, 29661, 29662, 29663, 29664, 29665,
    29666, 29668, 29669, 29670, 29671, 29672, 29673, 29674,
    29675, 29676, 29678, 29679, 29680, 29681, 29682, 29683,
    29684, 29685, 29686, 29688, 29689, 29690, 29691, 29692,
    29693, 29694, 29695, 29696, 29698, 29699, 29700, 29701,
    29702, 29703, 29704, 29705, 29706, 29708, 29709, 29710,
    29711, 29712, 29713, 29714, 29715, 29716, 29718, 29719,
    29720, 29721, 29722, 29723, 29724, 29725, 29726, 29728,
    29729, 29730, 29731, 29732, 29733, 29734, 29735, 29736,
    29738, 29739, 29740, 29741, 29742, 29743, 29744, 29745,
    29746, 29748, 29749, 29750, 29751, 29752, 29753, 29754,
    29755, 29756, 29758, 29759, 29760, 29761, 29762, 29763,
    29764, 29765, 29767, 29768, 29769, 29770, 29771, 29772,
    29773, 29774, 29775, 29777, 29778, 29779, 29780, 29781,
    29782, 29783, 29784, 29785, 29787, 29788, 29789, 29790,
    29791, 29792, 29793, 29794, 29795, 29797, 29798, 29799,
    29800, 29801, 29802, 29803, 29804, 29805, 29807, 29808,
    29809, 29810, 29811, 29812, 29813, 29814, 29815, 29817,
    29818, 29819, 29820, 29821, 29822, 29823, 29824, 29826,
    29827, 29828, 29829, 29830, 29831, 29832, 29833, 29834,
    29836, 29837, 29838, 29839, 29840, 29841, 29842, 29843,
    29844, 29846, 29847, 29848, 29849, 29850, 29851, 29852,
    29853, 29854, 29856, 29857, 29858, 29859, 29860, 29861,
    29862, 29863, 29864, 29866, 29867, 29868, 29869, 29870,
    29871, 29872, 29873, 29874, 29876, 29877, 29878, 29879,
    29880, 29881, 29882, 29883, 29885, 29886, 29887, 29888,
    29889, 29890, 29891, 29892, 29893, 29895, 29896, 29897,
    29898, 29899, 29900, 29901, 29902, 29903, 29905, 29906,
    29907, 29908, 29909, 29910, 29911, 29912, 29913, 29915,
    29916, 29917, 29918, 29919, 29920, 29921, 29922, 29924,
    29925, 29926, 29927, 29928, 29929, 29930, 29931, 29932,
    29934, 29935, 29936, 29937, 29938, 29939, 29940, 29941,
    29942, 29944, 29945, 29946, 29947, 29948, 29949, 29950,
    29951, 29952, 29954, 29955, 29956, 29957, 29958, 29959,
    29960, 29961, 29963, 29964, 29965, 29966, 29967, 29968,
    29969, 29970, 29971, 29973, 29974, 29975, 29976, 29977,
    29978, 29979, 29980, 29981, 29983, 29984, 29985, 29986,
    29987, 29988, 29989, 29990, 29991, 29993, 29994, 29995,
    29996, 29997, 29998, 29999, 30000, 30002, 30003, 30004,
    30005, 30006, 30007, 30008, 30009, 30010, 30012, 30013,
    30014, 30015, 30016, 30017, 30018, 30019, 30020, 30022,
    30023, 30024, 30025, 30026, 30027, 30028, 30029, 30031,
    30032, 30033, 30034, 30035, 30036, 30037, 30038, 30039,
    30041, 30042, 30043, 30044, 30045, 30046, 30047, 30048,
    30049, 30051, 30052, 30053, 30054, 30055, 30056, 30057,
    30058, 30060, 30061, 30062, 30063, 30064, 30065, 30066,
    30067, 30068, 30070, 30071, 30072, 30073, 30074, 30075,
    30076, 30077, 30078, 30080, 30081, 30082, 30083, 30084,
    30085, 30086, 30087, 30089, 30090, 30091, 30092, 30093,
    30094, 30095, 30096, 30097, 30099, 30100, 30101, 30102,
    30103, 30104, 30105, 30106, 30107, 30109, 30110, 30111,
    30112, 30113, 30114, 30115, 30116, 30118, 30119, 30120,
    30121, 30122, 30123, 30124, 30125, 30126, 30128, 30129,
    30130, 30131, 30132, 30133, 30134, 30135, 30136, 30138,
    30139, 30140, 30141, 30142, 30143, 30144, 30145, 30147,
    30148, 30149, 30150, 30151, 30152, 30153, 30154, 30155,
    30157, 30158, 30159, 30160, 30161, 30162, 30163, 30164,
    30165, 30167, 30168, 30169, 30170, 30171, 30172, 30173,
    30174, 30176, 30177, 30178, 30179, 30180, 30181, 30182,
    30183, 30184, 30186, 30187, 30188, 30189, 30190, 30191,
    30192, 30193, 30195, 30196, 30197, 30198, 30199, 30200,
    30201, 30202, 30203, 30205, 30206, 30207, 30208, 30209,
    30210, 30211, 30212, 30214, 30215, 30216, 30217, 30218,
    30219, 30220, 30221, 30222, 30224, 30225, 30226, 30227,
    30228, 30229, 30230, 30231, 30232, 30234, 30235, 30236,
    30237, 30238, 30239, 30240, 30241, 30243, 30244, 30245,
    30246, 30247, 30248, 30249, 30250, 30251, 30253, 30254,
    30255, 30256, 30257, 30258, 30259, 30260, 30262, 30263,
    30264, 30265, 30266, 30267, 30268, 30269, 30270, 30272,
    30273, 30274, 30275, 30276, 30277, 30278, 30279, 30281,
    30282, 30283, 30284, 30285, 30286, 30287, 30288, 30289,
    30291, 30292, 30293, 30294, 30295, 30296, 30297, 30298,
    30300, 30301, 30302, 30303, 30304, 30305, 30306, 30307,
    30308, 30310, 30311, 30312, 30313, 30314, 30315, 30316,
    30317, 30319, 30320, 30321, 30322, 30323, 30324, 30325,
    30326, 30327, 30329, 30330, 30331, 30332, 30333, 30334,
    30335, 30336, 30338, 30339, 30340, 30341, 30342, 30343,
    30344, 30345, 30346, 30348, 30349, 30350, 30351, 30352,
    30353, 30354, 30355, 30357, 30358, 30359, 30360, 30361,
    30362, 30363, 30364, 30365, 30367, 30368, 30369, 30370,
    30371, 30372, 30373, 30374, 30376, 30377, 30378, 30379,
    30380, 30381, 30382, 30383, 30384, 30386, 30387, 30388,
    30389, 30390, 30391, 30392, 30393, 30395, 30396, 30397,
    30398, 30399, 30400, 30401, 30402, 30403, 30405, 30406,
    30407, 30408, 30409, 30410, 30411, 30412, 30414, 30415,
    30416, 30417, 30418, 30419, 30420, 30421, 30422, 30424,
    30425, 30426, 30427, 30428, 30429, 30430, 30431, 30433,
    30434, 30435, 30436, 30437, 30438, 30439, 30440, 30441,
    30443, 30444, 30445, 30446, 30447, 30448, 30449, 30450,
    30452, 30453, 30454, 30455, 30456, 30457, 30458, 30459,
    30460, 30462, 30463, 30464, 30465, 30466, 30467, 30468,
    30469, 30471, 30472, 30473, 30474, 30475, 30476, 30477,
    30478, 30480, 30481, 30482, 30483, 30484, 30485, 30486,
    30487, 30488, 30490, 30491, 30492, 30493, 30494, 30495,
    30496, 30497, 30499, 30500, 30501, 30502, 30503, 30504,
    30505, 30506, 30507, 30509, 30510, 30511, 30512, 30513,
    30514, 30515, 30516, 30518, 30519, 30520, 30521, 30522,
    30523, 30524, 30525, 30527, 30528, 30529, 30530, 30531,
    30532, 30533, 30534, 30535, 30537, 30538, 30539, 30540,
    30541, 30542, 30543, 30544, 30546, 30547, 30548, 30549,
    30550, 30551, 30552, 30553, 30555, 30556, 30557, 30558,
    30559, 30560, 30561, 30562, 30563, 30565, 30566, 30567,
    30568, 30569, 30570, 30571, 30572, 30574, 30575, 30576,
    30577, 30578, 30579, 30580, 30581, 30582, 30584, 30585,
    30586, 30587, 30588, 30589, 30590, 30591, 30593, 30594,
    30595, 30596, 30597, 30598, 30599, 30600, 30602, 30603,
    30604, 30605, 30606, 30607, 30608, 30609, 30610, 30612,
    30613, 30614, 30615, 30616, 30617, 30618, 30619, 30621,
    30622, 30623, 30624, 30625, 30626, 30627, 30628, 30630,
    30631, 30632, 30633, 30634, 30635, 30636, 30637, 30638,
    30640, 30641, 30642, 30643, 30644, 30645, 30646, 30647,
    30649, 30650, 30651, 30652, 30653, 30654, 30655, 30656,
    30658, 30659, 30660, 30661, 30662, 30663, 30664, 30665,
    30666, 30668, 30669, 30670, 30671, 30672, 30673, 30674,
    30675, 30677, 30678, 30679, 30680, 30681, 30682, 30683,
    30684, 30686, 30687, 30688, 30689, 30690, 30691, 30692,
    30693, 30695, 30696, 30697, 30698, 30699, 30700, 30701,
    30702, 30703, 30705, 30706, 30707, 30708, 30709, 30710,
    30711, 30712, 30714, 30715, 30716, 30717, 30718, 30719,
    30720, 30721, 30723, 30724, 30725, 30726, 30727, 30728,
    30729, 30730, 30731, 30733, 30734, 30735, 30736, 30737,
    30738, 30739, 30740, 30742, 30743, 30744, 30745, 30746,
    30747, 30748, 30749, 30751, 30752, 30753, 30754, 30755,
    30756, 30757, 30758, 30760, 30761, 30762, 30763, 30764,
    30765, 30766, 30767, 30768, 30770, 30771, 30772, 30773,
    30774, 30775, 30776, 30777, 30779, 30780, 30781, 30782,
    30783, 30784, 30785, 30786, 30788, 30789, 30790, 30791,
    30792, 30793, 30794, 30795, 30797, 30798, 30799, 30800,
    30801, 30802, 30803, 30804, 30806, 30807, 30808, 30809,
    30810, 30811, 30812, 30813, 30814, 30816, 30817, 30818,
    30819, 30820, 30821, 30822, 30823, 30825, 30826, 30827,
    30828, 30829, 30830, 30831, 30832, 30834, 30835, 30836,
    30837, 30838, 30839, 30840, 30841, 30843, 30844, 30845,
    30846, 30847, 30848, 30849, 30850, 30852, 30853, 30854,
    30855, 30856, 30857, 30858, 30859, 30860, 30862, 30863,
    30864, 30865, 30866, 30867, 30868, 30869, 30871, 30872,
    30873, 30874, 30875, 30876, 30877, 30878, 30880, 30881,
    30882, 30883, 30884, 30885, 30886, 30887, 30889, 30890,
    30891, 30892, 30893, 30894, 30895, 30896, 30898, 30899,
    30900, 30901, 30902, 30903, 30904, 30905, 30906, 30908,
    30909, 30910, 30911, 30912, 30913, 30914, 30915, 30917,
    30918, 30919, 30920, 30921, 30922, 30923, 30924, 30926,
    30927, 30928, 30929, 30930, 30931, 30932, 30933, 30935,
    30936, 30937, 30938, 30939, 30940, 30941, 30942, 30944,
    30945, 30946, 30947, 30948, 30949, 30950, 30951, 30953,
    30954, 30955, 30956, 30957, 30958, 30959, 30960, 30962,
    30963, 30964, 30965, 30966, 30967, 30968, 30969, 30970,
    30972, 30973, 30974, 30975, 30976, 30977, 30978, 30979,
    30981, 30982, 30983, 30984, 30985, 30986, 30987, 30988,
    30990, 30991, 30992, 30993, 30994, 30995, 30996, 30997,
    30999, 31000, 31001, 31002, 31003, 31004, 31005, 31006,
    31008, 31009, 31010, 31011, 31012, 31013, 31014, 31015,
    31017, 31018, 31019, 31020, 31021, 31022, 31023, 31024,
    31026, 31027, 31028, 31029, 31030, 31031, 31032, 31033,
    31035, 31036, 31037, 31038, 31039, 31040, 31041, 31042,
    31044, 31045, 31046, 31047, 31048, 31049, 31050, 31051,
    31053, 31054, 31055, 31056, 31057, 31058, 31059, 31060,
    31061, 31063, 31064, 31065, 31066, 31067, 31068, 31069,
    31070, 31072, 31073, 31074, 31075, 31076, 31077, 31078,
    31079, 31081, 31082, 31083, 31084, 31085, 31086, 31087,
    31088, 31090, 31091, 31092, 31093, 31094, 31095, 31096,
    31097, 31099, 31100, 31101, 31102, 31103, 31104, 31105,
    31106, 31108, 31109, 31110, 31111, 31112, 31113, 31114,
    31115, 31117, 31118, 31119, 31120, 31121, 31122, 31123,
    31124, 31126, 31127, 31128, 31129, 31130, 31131, 31132,
    31133, 31135, 31136, 31137, 31138, 31139, 31140, 31141,
    31142, 31144, 31145, 31146, 31147, 31148, 31149, 31150,
    31151, 31153, 31154, 31155, 31156, 31157, 31158, 31159,
    31160, 31162, 31163, 31164, 31165, 31166, 31167, 31168,
    31169, 31171, 31172, 31173, 31174, 31175, 31176, 31177,
    31178, 31180, 31181, 31182, 31183, 31184, 31185, 31186,
    31187, 31189, 31190, 31191, 31192, 31193, 31194, 31195,
    31196, 31198, 31199, 31200, 31201, 31202, 31203, 31204,
    31205, 31207, 31208, 31209, 31210, 31211, 31212, 31213,
    31214, 31216, 31217, 31218, 31219, 31220, 31221, 31222,
    31223, 31225, 31226, 31227, 31228, 31229, 31230, 31231,
    31232, 31234, 31235, 31236, 31237, 31238, 31239, 31240,
    31241, 31243, 31244, 31245, 31246, 31247, 31248, 31249,
    31250, 31252, 31253, 31254, 31255, 31256, 31257, 31258,
    31259, 31261, 31262, 31263, 31264, 31265, 31266, 31267,
    31268, 31270, 31271, 31272, 31273, 31274, 31275, 31276,
    31277, 31279, 31280, 31281, 31282, 31283, 31284, 31285,
    31286, 31288, 31289, 31290, 31291, 31292, 31293, 31294,
    31295, 31297, 31298, 31299, 31300, 31301, 31302, 31303,
    31304, 31306, 31307, 31308, 31309, 31310, 31311, 31312,
    31314, 31315, 31316, 31317, 31318, 31319, 31320, 31321,
    31323, 31324, 31325, 31326, 31327, 31328, 31329, 31330,
    31332, 31333, 31334, 31335, 31336, 31337, 31338, 31339,
    31341, 31342, 31343, 31344, 31345, 31346, 31347, 31348,
    31350, 31351, 31352, 31353, 31354, 31355, 31356, 31357,
    31359, 31360, 31361, 31362, 31363, 31364, 31365, 31366,
    31368, 31369, 31370, 31371, 31372, 31373, 31374, 31375,
    31377, 31378, 31379, 31380, 31381, 31382, 31383, 31384,
    31386, 31387, 31388, 31389, 31390, 31391, 31392, 31393,
    31395, 31396, 31397, 31398, 31399, 31400, 31401, 31402,
    31404, 31405, 31406, 31407, 31408, 31409, 31410, 31412,
    31413, 31414, 31415, 31416, 31417, 31418, 31419, 31421,
    31422, 31423, 31424, 31425, 31426, 31427, 31428, 31430,
    31431, 31432, 31433, 31434, 31435, 31436, 31437, 31439,
    31440, 31441, 31442, 31443, 31444, 31445, 31446, 31448,
    31449, 31450, 31451, 31452, 31453, 31454, 31455, 31457,
    31458, 31459, 31460, 31461, 31462, 31463, 31464, 31466,
    31467, 31468, 31469, 31470, 31471, 31472, 31474, 31475,
    31476, 31477, 31478, 31479, 31480, 31481, 31483, 31484,
    31485, 31486, 31487, 31488, 31489, 31490, 31492, 31493,
    31494, 31495, 31496, 31497, 31498, 31499, 31501, 31502,
    31503, 31504, 31505, 31506, 31507, 31508, 31510, 31511,
    31512, 31513, 31514, 31515, 31516, 31517, 31519, 31520,
    31521, 31522, 31523, 31524, 31525, 31527, 31528, 31529,
    31530, 31531, 31532, 31533, 31534, 31536, 31537, 31538,
    31539, 31540, 31541, 31542, 31543, 31545, 31546, 31547,
    31548, 31549, 31550, 31551, 31552, 31554, 31555, 31556,
    31557, 31558, 31559, 31560, 31561, 31563, 31564, 31565,
    31566, 31567, 31568, 31569, 31571, 31572, 31573, 31574,
    31575, 31576, 31577, 31578, 31580, 31581, 31582, 31583,
    31584, 31585, 31586, 31587, 31589, 31590, 31591, 31592,
    31593, 31594, 31595, 31596, 31598, 31599, 31600, 31601,
    31602, 31603, 31604, 31606, 31607, 31608, 31609, 31610,
    31611, 31612, 31613, 31615, 31616, 31617, 31618, 31619,
    31620, 31621, 31622, 31624, 31625, 31626, 31627, 31628,
    31629, 31630, 31631, 31633, 31634, 31635, 31636, 31637,
    31638, 31639, 31641, 31642, 31643, 31644, 31645, 31646,
    31647, 31648, 31650, 31651, 31652, 31653, 31654, 31655,
    31656, 31657, 31659, 31660, 31661, 31662, 31663, 31664,
    31665, 31666, 31668, 31669, 31670, 31671, 31672, 31673,
    31674, 31676, 31677, 31678, 31679, 31680, 31681, 31682,
    31683, 31685, 31686, 31687, 31688, 31689, 31690, 31691,
    31692, 31694, 31695, 31696, 31697, 31698, 31699, 31700,
    31701, 31703, 31704, 31705, 31706, 31707, 31708, 31709,
    31711, 31712, 31713, 31714, 31715, 31716, 31717, 31718,
    31720, 31721, 31722, 31723, 31724, 31725, 31726, 31727,
    31729, 31730, 31731, 31732, 31733, 31734, 31735, 31737,
    31738, 31739, 31740, 31741, 31742, 31743, 31744, 31746,
    31747, 31748, 31749, 31750, 31751, 31752, 31753, 31755,
    31756, 31757, 31758, 31759, 31760, 31761, 31762, 31764,
    31765, 31766, 31767, 31768, 31769, 31770, 31772, 31773,
    31774, 31775, 31776, 31777, 31778, 31779, 31781, 31782,
    31783, 31784, 31785, 31786, 31787, 31788, 31790, 31791,
    31792, 31793, 31794, 31795, 31796, 31798, 31799, 31800,
    31801, 31802, 31803, 31804, 31805, 31807, 31808, 31809,
    31810, 31811, 31812, 31813, 31814, 31816, 31817, 31818,
    31819, 31820, 31821, 31822, 31824, 31825, 31826, 31827,
    31828, 31829, 31830, 31831, 31833, 31834, 31835, 31836,
    31837, 31838, 31839, 31841, 31842, 31843, 31844, 31845,
    31846, 31847, 31848, 31850, 31851, 31852, 31853, 31854,
    31855, 31856, 31857, 31859, 31860, 31861, 31862, 31863,
    31864, 31865, 31867, 31868, 31869, 31870, 31871, 31872,
    31873, 31874, 31876, 31877, 31878, 31879, 31880, 31881,
    31882, 31883, 31885, 31886, 31887, 31888, 31889, 31890,
    31891, 31893, 31894, 31895, 31896, 31897, 31898, 31899,
    31900, 31902, 31903, 31904, 31905, 31906, 31907, 31908,
    31910, 31911, 31912, 31913, 31914, 31915, 31916, 31917,
    31919, 31920, 31921, 31922, 31923, 31924, 31925, 31926,
    31928, 31929, 31930, 31931, 31932, 31933, 31934, 31936,
    31937, 31938, 31939, 31940, 31941, 31942, 31943, 31945,
    31946, 31947, 31948, 31949, 31950, 31951, 31953, 31954,
    31955, 31956, 31957, 31958, 31959, 31960, 31962, 31963,
    31964, 31965, 31966, 31967, 31968, 31969, 31971, 31972,
    31973, 31974, 31975, 31976, 31977, 31979, 31980, 31981,
    31982, 31983, 31984, 31985, 31986, 31988, 31989, 31990,
    31991, 31992, 31993, 31994, 31996, 31997, 31998, 31999,
    32000, 32001, 32002, 32003, 32005, 32006, 32007, 32008,
    32009, 32010, 32011, 32013, 32014, 32015, 32016, 32017,
    32018, 32019, 32020, 32022, 32023, 32024, 32025, 32026,
    32027, 32028, 32030, 32031, 32032, 32033, 32034, 32035,
    32036, 32037, 32039, 32040, 32041, 32042, 32043, 32044,
    32045, 32046, 32048, 32049, 32050, 32051, 32052, 32053,
    32054, 32056, 32057, 32058, 32059, 32060, 32061, 32062,
    32063, 32065, 32066, 32067, 32068, 32069, 32070, 32071,
    32073, 32074, 32075, 32076, 32077, 32078, 32079, 32080,
    32082, 32083, 32084, 32085, 32086, 32087, 32088, 32090,
    32091, 32092, 32093, 32094, 32095, 32096, 32097, 32099,
    32100, 32101, 32102, 32103, 32104, 32105, 32107, 32108,
    32109, 32110, 32111, 32112, 32113, 32114, 32116, 32117,
    32118, 32119, 32120, 32121, 32122, 32124, 32125, 32126,
    32127, 32128, 32129, 32130, 32131, 32133, 32134, 32135,
    32136, 32137, 32138, 32139, 32141, 32142, 32143, 32144,
    32145, 32146, 32147, 32148, 32150, 32151, 32152, 32153,
    32154, 32155, 32156, 32158, 32159, 32160, 32161, 32162,
    32163, 32164, 32165, 32167, 32168, 32169, 32170, 32171,
    32172, 32173, 32175, 32176, 32177, 32178, 32179, 32180,
    32181, 32182, 32184, 32185, 32186, 32187, 32188, 32189,
    32190, 32192, 32193, 32194, 32195, 32196, 32197, 32198,
    32200, 32201, 32202, 32203, 32204, 32205, 32206, 32207,
    32209, 32210, 32211, 32212, 32213, 32214, 32215, 32217,
    32218, 32219, 32220, 32221, 32222, 32223, 32224, 32226,
    32227, 32228, 32229, 32230, 32231, 32232, 32234, 32235,
    32236, 32237, 32238, 32239, 32240, 32241, 32243, 32244,
    32245, 32246, 32247, 32248, 32249, 32251, 32252, 32253,
    32254, 32255, 32256, 32257, 32259, 32260, 32261, 32262,
    32263, 32264, 32265, 32266, 32268, 32269, 32270, 32271,
    32272, 32273, 32274, 32276, 32277, 32278, 32279, 32280,
    32281, 32282, 32283, 32285, 32286, 32287, 32288, 32289,
    32290, 32291, 32293, 32294, 32295, 32296, 32297, 32298,
    32299, 32300, 32302, 32303, 32304, 32305, 32306, 32307,
    32308, 32310, 32311, 32312, 32313, 32314, 32315, 32316,
    32318, 32319, 32320, 32321, 32322, 32323, 32324, 32325,
    32327, 32328, 32329, 32330, 32331, 32332, 32333, 32335,
    32336, 32337, 32338, 32339, 32340, 32341, 32342, 32344,
    32345, 32346, 32347, 32348, 32349, 32350, 32352, 32353,
    32354, 32355, 32356, 32357, 32358, 32360, 32361, 32362,
    32363, 32364, 32365, 32366, 32367, 32369, 32370, 32371,
    32372, 32373, 32374, 32375, 32377, 32378, 32379, 32380,
    32381, 32382, 32383, 32385, 32386, 32387, 32388, 32389,
    32390, 32391, 32392, 32394, 32395, 32396, 32397, 32398,
    32399, 32400, 32402, 32403, 32404, 32405, 32406, 32407,
    32408, 32410, 32411, 32412, 32413, 32414, 32415, 32416,
    32417, 32419, 32420, 32421, 32422, 32423, 32424, 32425,
    32427, 32428, 32429, 32430, 32431, 32432, 32433, 32435,
    32436, 32437, 32438, 32439, 32440, 32441, 32442, 32444,
    32445, 32446, 32447, 32448, 32449, 32450, 32452, 32453,
    32454, 32455, 32456, 32457, 32458, 32460, 32461, 32462,
    32463, 32464, 32465, 32466, 32467, 32469, 32470, 32471,
    32472, 32473, 32474, 32475, 32477, 32478, 32479, 32480,
    32481, 32482, 32483, 32485, 32486, 32487, 32488, 32489,
    32490, 32491, 32492, 32494, 32495, 32496, 32497, 32498,
    32499, 32500, 32502, 32503, 32504, 32505, 32506, 32507,
    32508, 32510, 32511, 32512, 32513, 32514, 32515, 32516,
    32517, 32519, 32520, 32521, 32522, 32523, 32524, 32525,
    32527, 32528, 32529, 32530, 32531, 32532, 32533, 32535,
    32536, 32537, 32538, 32539, 32540, 32541, 32543, 32544,
    32545, 32546, 32547, 32548, 32549, 32550, 32552, 32553,
    32554, 32555, 32556, 32557, 32558, 32560, 32561, 32562,
    32563, 32564, 32565, 32566, 32568, 32569, 32570, 32571,
    32572, 32573, 32574, 32575, 32577, 32578, 32579, 32580,
    32581, 32582, 32583, 32585, 32586, 32587, 32588, 32589,
    32590, 32591, 32593, 32594, 32595, 32596, 32597, 32598,
    32599, 32601, 32602, 32603, 32604, 32605, 32606, 32607,
    32608, 32610, 32611, 32612, 32613, 32614, 32615, 32616,
    32618, 32619, 32620, 32621, 32622, 32623, 32624, 32626,
    32627, 32628, 32629, 32630, 32631, 32632, 32634, 32635,
    32636, 32637, 32638, 32639, 32640, 32642, 32643, 32644,
    32645, 32646, 32647, 32648, 32649, 32651, 32652, 32653,
    32654, 32655, 32656, 32657, 32659, 32660, 32661, 32662,
    32663, 32664, 32665, 32667, 32668, 32669, 32670, 32671,
    32672, 32673, 32675, 32676, 32677, 32678, 32679, 32680,
    32681, 32682, 32684, 32685, 32686, 32687, 32688, 32689,
    32690, 32692, 32693, 32694, 32695, 32696, 32697, 32698,
    32700, 32701, 32702, 32703, 32704, 32705, 32706, 32708,
    32709, 32710, 32711, 32712, 32713, 32714, 32716, 32717,
    32718, 32719, 32720, 32721, 32722, 32723, 32725, 32726,
    32727, 32728, 32729, 32730, 32731, 32733, 32734, 32735,
    32736, 32737, 32738, 32739, 32741, 32742, 32743, 32744,
    32745, 32746, 32747, 32749, 32750, 32751, 32752, 32753,
    32754, 32755, 32757, 32758, 32759, 32760, 32761, 32762,
    32763, 32765, 32766, 32767, 32768, 32769, 32770, 32771,
    32772, 32774, 32775, 32776, 32777, 32778, 32779, 32780,
    32782, 32783, 32784, 32785, 32786, 32787, 32788, 32790,
    32791, 32792, 32793, 32794, 32795, 32796, 32798, 32799,
    32800, 32801, 32802, 32803, 32804, 32806, 32807, 32808,
    32809, 32810, 32811, 32812, 32814, 32815, 32816, 32817,
    32818, 32819, 32820, 32821, 32823, 32824, 32825, 32826,
    32827, 32828, 32829, 32831, 32832, 32833, 32834, 32835,
    32836, 32837, 32839, 32840, 32841, 32842, 32843, 32844,
    32845, 32847, 32848, 32849, 32850, 32851, 32852, 32853,
    32855, 32856, 32857, 32858, 32859, 32860, 32861, 32863,
    32864, 32865, 32866, 32867, 32868, 32869, 32871, 32872,
    32873, 32874, 32875, 32876, 32877, 32879, 32880, 32881,
    32882, 32883, 32884, 32885, 32886, 32888, 32889, 32890,
    32891, 32892, 32893, 32894, 32896, 32897, 32898, 32899,
    32900, 32901, 32902, 32904, 32905, 32906, 32907, 32908,
    32909, 32910, 32912, 32913, 32914, 32915, 32916, 32917,
    32918, 32920, 32921, 32922, 32923, 32924, 32925, 32926,
    32928, 32929, 32930, 32931, 32932, 32933, 32934, 32936,
    32937, 32938, 32939, 32940, 32941, 32942, 32944, 32945,
    32946, 32947, 32948, 32949, 32950, 32952, 32953, 32954,
    32955, 32956, 32957, 32958, 32960, 32961, 32962, 32963,
    32964, 32965, 32966, 32967, 32969, 32970, 32971, 32972,
    32973, 32974, 32975, 32977, 32978, 32979, 32980, 32981,
    32982, 32983, 32985, 32986, 32987, 32988, 32989, 32990,
    32991, 32993, 32994, 32995, 32996, 32997, 32998, 32999,
    33001, 33002, 33003, 33004, 33005, 33006, 33007, 33009,
    33010, 33011, 33012, 33013, 33014, 33015, 33017, 33018,
    33019, 33020, 33021, 33022, 33023, 33025, 33026, 33027,
    33028, 33029, 33030, 33031, 33033, 33034, 33035, 33036,
    33037, 33038, 33039, 33041, 33042, 33043, 33044, 33045,
    33046, 33047, 33049, 33050, 33051, 33052, 33053, 33054,
    33055, 33057, 33058, 33059, 33060, 33061, 33062, 33063,
    33065, 33066, 33067, 33068, 33069, 33070, 33071, 33073,
    33074, 33075, 33076, 33077, 33078, 33079, 33081, 33082,
    33083, 33084, 33085, 33086, 33087, 33089, 33090, 33091,
    33092, 33093, 33094, 33095, 33097, 33098, 33099, 33100,
    33101, 33102, 33103, 33105, 33106, 33107, 33108, 33109,
    33110, 33111, 33113, 33114, 33115, 33116, 33117, 33118,
    33119, 33121, 33122, 33123, 33124, 33125, 33126, 33127,
    33129, 33130, 33131, 33132, 33133, 33134, 33135, 33137,
    33138, 33139, 33140, 33141, 33142, 33143, 33145, 33146,
    33147, 33148, 33149, 33150, 33151, 33153, 33154, 33155,
    33156, 33157, 33158, 33159, 33161, 33162, 33163, 33164,
    33165, 33166, 33167, 33169, 33170, 33171, 33172, 33173,
    33174, 33175, 33177, 33178, 33179, 33180, 33181, 33182,
    33183, 33185, 33186, 33187, 33188, 33189, 33190, 33191,
    33193, 33194, 33195, 33196, 33197, 33198, 33199, 33201,
    33202, 33203, 33204, 33205, 33206, 33207, 33209, 33210,
    33211, 33212, 33213, 33214, 33215, 33217, 33218, 33219,
    33220, 33221, 33222, 33223, 33225, 33226, 33227, 33228,
    33229, 33230, 33231, 33233, 33234, 33235, 33236, 33237,
    33238, 33239, 33241, 33242, 33243, 33244, 33245, 33246,
    33247, 33249, 33250, 33251, 33252, 33253, 33254, 33255,
    33257, 33258, 33259, 33260, 33261, 33262, 33263, 33265,
    33266, 33267, 33268, 33269, 33270, 33271, 33273, 33274,
    33275, 33276, 33277, 33278, 33280, 33281, 33282, 33283,
    33284, 33285, 33286, 33288, 33289, 33290, 33291, 33292,
    33293, 33294, 33296, 33297, 33298, 33299, 33300, 33301,
    33302, 33304, 33305, 33306, 33307, 33308, 33309, 33310,
    33312, 33313, 33314, 33315, 33316, 33317, 33318, 33320,
    33321, 33322, 33323, 33324, 33325, 33326, 33328, 33329,
    33330, 33331, 33332, 33333, 33334, 33336, 33337, 33338,
    33339, 33340, 33341, 33342, 33344, 33345, 33346, 33347,
    33348, 33349, 33350, 33352, 33353, 33354, 33355, 33356,
    33357, 33359, 33360, 33361, 33362, 33363, 33364, 33365,
    33367, 33368, 33369, 33370, 33371, 33372, 33373, 33375,
    33376, 33377, 33378, 33379, 33380, 33381, 33383, 33384,
    33385, 33386, 33387, 33388, 33389, 33391, 33392, 33393,
    33394, 33395, 33396, 33397, 33399, 33400, 33401, 33402,
    33403, 33404, 33405, 33407, 33408, 33409, 33410, 33411,
    33412, 33413, 33415, 33416, 33417, 33418, 33419, 33420,
    33422, 33423, 33424, 33425, 33426, 33427, 33428, 33430,
    33431, 33432, 33433, 33434, 33435, 33436, 33438, 33439,
    33440, 33441, 33442, 33443, 33444, 33446, 33447, 33448,
    33449, 33450, 33451, 33452, 33454, 33455, 33456, 33457,
    33458, 33459, 33460, 33462, 33463, 33464, 33465, 33466,
    33467, 33468, 33470, 33471, 33472, 33473, 33474, 33475,
    33477, 33478, 33479, 33480, 33481, 33482, 33483, 33485,
    33486, 33487, 33488, 33489, 33490, 33491, 33493, 33494,
    33495, 33496, 33497, 33498, 33499, 33501, 33502, 33503,
    33504, 33505, 33506, 33507, 33509, 33510, 33511, 33512,
    33513, 33514, 33515, 33517, 33518, 33519, 33520, 33521,
    33522, 33524, 33525, 33526, 33527, 33528, 33529, 33530,
    33532, 33533, 33534, 33535, 33536, 33537, 33538, 33540,
    33541, 33542, 33543, 33544, 33545, 33546, 33548, 33549,
    33550, 33551, 33552, 33553, 33554, 33556, 33557, 33558,
    33559, 33560, 33561, 33563, 33564, 33565, 33566, 33567,
    33568, 33569, 33571, 33572, 33573, 33574, 33575, 33576,
    33577, 33579, 33580, 33581, 33582, 33583, 33584, 33585,
    33587, 33588, 33589, 33590, 33591, 33592, 33593, 33595,
    33596, 33597, 33598, 33599, 33600, 33602, 33603, 33604,
    33605, 33606, 33607, 33608, 33610, 33611, 33612, 33613,
    33614, 33615, 33616, 33618, 33619, 33620, 33621, 33622,
    33623, 33624, 33626, 33627, 33628, 33629, 33630, 33631,
    33633, 33634, 33635, 33636, 33637, 33638, 33639, 33641,
    33642, 33643, 33644, 33645, 33646, 33647, 33649, 33650,
    33651, 33652, 33653, 33654, 33655, 33657, 33658, 33659,
    33660, 33661, 33662, 33664, 33665, 33666, 33667, 33668,
    33669, 33670, 33672, 33673, 33674, 33675, 33676, 33677,
    33678, 33680, 33681, 33682, 33683, 33684, 33685, 33686,
    33688, 33689, 33690, 33691, 33692, 33693, 33695, 33696,
    33697, 33698, 33699, 33700, 33701, 33703, 33704, 33705,
    33706, 33707, 33708, 33709, 33711, 33712, 33713, 33714,
    33715, 33716, 33717, 33719, 33720, 33721, 33722, 33723,
    33724, 33726, 33727, 33728, 33729, 33730, 33731, 33732,
    33734, 33735, 33736, 33737, 33738, 33739, 33740, 33742,
    33743, 33744, 33745, 33746, 33747, 33749, 33750, 33751,
    33752, 33753, 33754, 33755, 33757, 33758, 33759, 33760,
    33761, 33762, 33763, 33765, 33766, 33767, 33768, 33769,
    33770, 33771, 33773, 33774, 33775, 33776, 33777, 33778,
    33780, 33781, 33782, 33783, 33784, 33785, 33786, 33788,
    33789, 33790, 33791, 33792, 33793, 33794, 33796, 33797,
    33798, 33799, 33800, 33801, 33803, 33804, 33805, 33806,
    33807, 33808, 33809, 33811, 33812, 33813, 33814, 33815,
    33816, 33817, 33819, 33820, 33821, 33822, 33823, 33824,
    33826, 33827, 33828, 33829, 33830, 33831, 33832, 33834,
    33835, 33836, 33837, 33838, 33839, 33840, 33842, 33843,
    33844, 33845, 33846, 33847, 33849, 33850, 33851, 33852,
    33853, 33854, 33855, 33857, 33858, 33859, 33860, 33861,
    33862, 33863, 33865, 33866, 33867, 33868, 33869, 33870,
    33872, 33873, 33874, 33875, 33876, 33877, 33878, 33880,
    33881, 33882, 33883, 33884, 33885, 33886, 33888, 33889,
    33890, 33891, 33892, 33893, 33895, 33896, 33897, 33898,
    33899, 33900, 33901, 33903, 33904, 33905, 33906, 33907,
    33908, 33909, 33911, 33912, 33913, 33914, 33915, 33916,
    33918, 33919, 33920, 33921, 33922, 33923, 33924, 33926,
    33927, 33928, 33929, 33930, 33931, 33933, 33934, 33935,
    33936, 33937, 33938, 33939, 33941, 33942, 33943, 33944,
    33945, 33946, 33947, 33949, 33950, 33951, 33952, 33953,
    33954, 33956, 33957, 33958, 33959, 33960, 33961, 33962,
    33964, 33965, 33966, 33967, 33968, 33969, 33970, 33972,
    33973, 33974, 33975, 33976, 33977, 33979, 33980, 33981,
    33982, 33983, 33984, 33985, 33987, 33988, 33989, 33990,
    33991, 33992, 33994, 33995, 33996, 33997, 33998, 33999,
    34000, 34002, 34003, 34004, 34005, 34006, 34007, 34008,
    34010, 34011, 34012, 34013, 34014, 34015, 34017, 34018,
    34019, 34020, 34021, 34022, 34023, 34025, 34026, 34027,
    34028, 34029, 34030, 34032, 34033, 34034, 34035, 34036,
    34037, 34038, 34040, 34041, 34042, 34043, 34044, 34045,
    34046, 34048, 34049, 34050, 34051, 34052, 34053, 34055,
    34056, 34057, 34058, 34059, 34060, 34061, 34063, 34064,
    34065, 34066, 34067, 34068, 34070, 34071, 34072, 34073,
    34074, 34075, 34076, 34078, 34079, 34080, 34081, 34082,
    34083, 34085, 34086, 34087, 34088, 34089, 34090, 34091,
    34093, 34094, 34095, 34096, 34097, 34098, 34099, 34101,
    34102, 34103, 34104, 34105, 34106, 34108, 34109, 34110,
    34111, 34112, 34113, 34114, 34116, 34117, 34118, 34119,
    34120, 34121, 34123, 34124, 34125, 34126, 34127, 34128,
    34129, 34131, 34132, 34133, 34134, 34135, 34136, 34138,
    34139, 34140, 34141, 34142, 34143, 34144, 34146, 34147,
    34148, 34149, 34150, 34151, 34153, 34154, 34155, 34156,
    34157, 34158, 34159, 34161, 34162, 34163, 34164, 34165,
    34166, 34168, 34169, 34170, 34171, 34172, 34173, 34174,
    34176, 34177, 34178, 34179, 34180, 34181, 34183, 34184,
    34185, 34186, 34187, 34188, 34189, 34191, 34192, 34193,
    34194, 34195, 34196, 34198, 34199, 34200, 34201, 34202,
    34203, 34204, 34206, 34207, 34208, 34209, 34210, 34211,
    34213, 34214, 34215, 34216, 34217, 34218, 34219, 34221,
    34222, 34223, 34224, 34225, 34226, 34227, 34229, 34230,
    34231, 34232, 34233, 34234, 34236, 34237, 34238, 34239,
    34240, 34241, 34243, 34244, 34245, 34246, 34247, 34248,
    34249, 34251, 34252, 34253, 34254, 34255, 34256, 34258,
    34259, 34260, 34261, 34262, 34263, 34264, 34266, 34267,
    34268, 34269, 34270, 34271, 34273, 34274, 34275, 34276,
    34277, 34278, 34279, 34281, 34282, 34283, 34284, 34285,
    34286, 34288, 34289, 34290, 34291, 34292, 34293, 34294,
    34296, 34297, 34298, 34299, 34300, 34301, 34303, 34304,
    34305, 34306, 34307, 34308, 34309, 34311, 34312, 34313,
    34314, 34315, 34316, 34318, 34319, 34320, 34321, 34322,
    34323, 34324, 34326, 34327, 34328, 34329, 34330, 34331,
    34333, 34334, 34335, 34336, 34337, 34338, 34339, 34341,
    34342, 34343, 34344, 34345, 34346, 34348, 34349, 34350,
    34351, 34352, 34353, 34354, 34356, 34357, 34358, 34359,
    34360, 34361, 34363, 34364, 34365, 34366, 34367, 34368,
    34370, 34371, 34372, 34373, 34374, 34375, 34376, 34378,
    34379, 34380, 34381, 34382, 34383, 34385, 34386, 34387,
    34388, 34389, 34390, 34391, 34393, 34394, 34395, 34396,
    34397, 34398, 34400, 34401, 34402, 34403, 34404, 34405,
    34406, 34408, 34409, 34410, 34411, 34412, 34413, 34415,
    34416, 34417, 34418, 34419, 34420, 34422, 34423, 34424,
    34425, 34426, 34427, 34428, 34430, 34431, 34432, 34433,
    34434, 34435, 34437, 34438, 34439, 34440, 34441, 34442,
    34443, 34445, 34446, 34447, 34448, 34449, 34450, 34452,
    34453, 34454, 34455, 34456, 34457, 34458, 34460, 34461,
    34462, 34463, 34464, 34465, 34467, 34468, 34469, 34470,
    34471, 34472, 34474, 34475, 34476, 34477, 34478, 34479,
    34480, 34482, 34483, 34484, 34485, 34486, 34487, 34489,
    34490, 34491, 34492, 34493, 34494, 34496, 34497, 34498,
    34499, 34500, 34501, 34502, 34504, 34505, 34506, 34507,
    34508, 34509, 34511, 34512, 34513, 34514, 34515, 34516,
    34517, 34519, 34520, 34521, 34522, 34523, 34524, 34526,
    34527, 34528, 34529, 34530, 34531, 34533, 34534, 34535,
    34536, 34537, 34538, 34539, 34541, 34542, 34543, 34544,
    34545, 34546, 34548, 34549, 34550, 34551, 34552, 34553,
    34555, 34556, 34557, 34558, 34559, 34560, 34561, 34563,
    34564, 34565, 34566, 34567, 34568, 34570, 34571, 34572,
    34573, 34574, 34575, 34576, 34578, 34579, 34580, 34581,
    34582, 34583, 34585, 34586, 34587, 34588, 34589, 34590,
    34592, 34593, 34594, 34595, 34596, 34597, 34598, 34600,
    34601, 34602, 34603, 34604, 34605, 34607, 34608, 34609,
    34610, 34611, 34612, 34614, 34615, 34616, 34617, 34618,
    34619, 34620, 34622, 34623, 34624, 34625, 34626, 34627,
    34629, 34630, 34631, 34632, 34633, 34634, 34636, 34637,
    34638, 34639, 34640, 34641, 34642, 34644, 34645, 34646,
    34647, 34648, 34649, 34651, 34652, 34653, 34654, 34655,
    34656, 34658, 34659, 34660, 34661, 34662, 34663, 34664,
    34666, 34667, 34668, 34669, 34670, 34671, 34673, 34674,
    34675, 34676, 34677, 34678, 34680, 34681, 34682, 34683,
    34684, 34685, 34686, 34688, 34689, 34690, 34691, 34692,
    34693, 34695, 34696, 34697, 34698, 34699, 34700, 34702,
    34703, 34704, 34705, 34706, 34707, 34709, 34710, 34711,
    34712, 34713, 34714, 34715, 34717, 34718, 34719, 34720,
    34721, 34722, 34724, 34725, 34726, 34727, 34728, 34729,
    34731, 34732, 34733, 34734, 34735, 34736, 34737, 34739,
    34740, 34741, 34742, 34743, 34744, 34746, 34747, 34748,
    34749, 34750, 34751, 34753, 34754, 34755, 34756, 34757,
    34758, 34760, 34761, 34762, 34763, 34764, 34765, 34766,
    34768, 34769, 34770, 34771, 34772, 34773, 34775, 34776,
    34777, 34778, 34779, 34780, 34782, 34783, 34784, 34785,
    34786, 34787, 34788, 34790, 34791, 34792, 34793, 34794,
    34795, 34797, 34798, 34799, 34800, 34801, 34802, 34804,
    34805, 34806, 34807, 34808, 34809, 34811, 34812, 34813,
    34814, 34815, 34816, 34817, 34819, 34820, 34821, 34822,
    34823, 34824, 34826, 34827, 34828, 34829, 34830, 34831,
    34833, 34834, 34835, 34836, 34837, 34838, 34840, 34841,
    34842, 34843, 34844, 34845, 34846, 34848, 34849, 34850,
    34851, 34852, 34853, 34855, 34856, 34857, 34858, 34859,
    34860, 34862, 34863, 34864, 34865, 34866, 34867, 34869,
    34870, 34871, 34872, 34873, 34874, 34875, 34877, 34878,
    34879, 34880, 34881, 34882, 34884, 34885, 34886, 34887,
    34888, 34889, 34891, 34892, 34893, 34894, 34895, 34896,
    34898, 34899, 34900, 34901, 34902, 34903, 34905, 34906,
    34907, 34908, 34909, 34910, 34911, 34913, 34914, 34915,
    34916, 34917, 34918, 34920, 34921, 34922, 34923, 34924,
    34925, 34927, 34928, 34929, 34930, 34931, 34932, 34934,
    34935, 34936, 34937, 34938, 34939, 34941, 34942, 34943,
    34944, 34945, 34946, 34947, 34949, 34950, 34951, 34952,
    34953, 34954, 34956, 34957, 34958, 34959, 34960, 34961,
    34963, 34964, 34965, 34966, 34967, 34968, 34970, 34971,
    34972, 34973, 34974, 34975, 34977, 34978, 34979, 34980,
    34981, 34982, 34983, 34985, 34986, 34987, 34988, 34989,
    34990, 34992, 34993, 34994, 34995, 34996, 34997, 34999,
    35000, 35001, 35002, 35003, 35004, 35006, 35007, 35008,
    35009, 35010, 35011, 35013, 35014, 35015, 35016, 35017,
    35018, 35019, 35021, 35022, 35023, 35024, 35025, 35026,
    35028, 35029, 35030, 35031, 35032, 35033, 35035, 35036,
    35037, 35038, 35039, 35040, 35042, 35043, 35044, 35045,
    35046, 35047, 35049, 35050, 35051, 35052, 35053, 35054,
    35056, 35057, 35058, 35059, 35060, 35061, 35062, 35064,
    35065, 35066, 35067, 35068, 35069, 35071, 35072, 35073,
    35074, 35075, 35076, 35078, 35079, 35080, 35081, 35082,
    35083, 35085, 35086, 35087, 35088, 35089, 35090, 35092,
    35093, 35094, 35095, 35096, 35097, 35099, 35100, 35101,
    35102, 35103, 35104, 35106, 35107, 35108, 35109, 35110,
    35111, 35112, 35114, 35115, 35116, 35117, 35118, 35119,
    35121, 35122, 35123, 35124, 35125, 35126, 35128, 35129,
    35130, 35131, 35132, 35133, 35135, 35136, 35137, 35138,
    35139, 35140, 35142, 35143, 35144, 35145, 35146, 35147,
    35149, 35150, 35151, 35152, 35153, 35154, 35156, 35157,
    35158, 35159, 35160, 35161, 35163, 35164, 35165, 35166,
    35167, 35168, 35169, 35171, 35172, 35173, 35174, 35175,
    35176, 35178, 35179, 35180, 35181, 35182, 35183, 35185,
    35186, 35187, 35188, 35189, 35190, 35192, 35193, 35194,
    35195, 35196, 35197, 35199, 35200, 35201, 35202, 35203,
    35204, 35206, 35207, 35208, 35209, 35210, 35211, 35213,
    35214, 35215, 35216, 35217, 35218, 35220, 35221, 35222,
    35223, 35224, 35225, 35227, 35228, 35229, 35230, 35231,
    35232, 35234, 35235, 35236, 35237, 35238, 35239, 35240,
    35242, 35243, 35244, 35245, 35246, 35247, 35249, 35250,
    35251, 35252, 35253, 35254, 35256, 35257, 35258, 35259,
    35260, 35261, 35263, 35264, 35265, 35266, 35267, 35268,
    35270, 35271, 35272, 35273, 35274, 35275, 35277, 35278,
    35279, 35280, 35281, 35282, 35284, 35285, 35286, 35287,
    35288, 35289, 35291, 35292, 35293, 35294, 35295, 35296,
    35298, 35299, 35300, 35301, 35302, 35303, 35305, 35306,
    35307, 35308, 35309, 35310, 35312, 35313, 35314, 35315,
    35316, 35317, 35319, 35320, 35321, 35322, 35323, 35324,
    35326, 35327, 35328, 35329, 35330, 35331, 35333, 35334,
    35335, 35336, 35337, 35338, 35339, 35341, 35342, 35343,
    35344, 35345, 35346, 35348, 35349, 35350, 35351, 35352,
    35353, 35355, 35356, 35357, 35358, 35359, 35360, 35362,
    35363, 35364, 35365, 35366, 35367, 35369, 35370, 35371,
    35372, 35373, 35374, 35376, 35377, 35378, 35379, 35380,
    35381, 35383, 35384, 35385, 35386, 35387, 35388, 35390,
    35391, 35392, 35393, 35394, 35395, 35397, 35398, 35399,
    35400, 35401, 35402, 35404, 35405, 35406, 35407, 35408,
    35409, 35411, 35412, 35413, 35414, 35415, 35416, 35418,
    35419, 35420, 35421, 35422, 35423, 35425, 35426, 35427,
    35428, 35429, 35430, 35432, 35433, 35434, 35435, 35436,
    35437, 35439, 35440, 35441, 35442, 35443, 35444, 35446,
    35447, 35448, 35449, 35450, 35451, 35453, 35454, 35455,
    35456, 35457, 35458, 35460, 35461, 35462, 35463, 35464,
    35465, 35467, 35468, 35469, 35470, 35471, 35472, 35474,
    35475, 35476, 35477, 35478, 35479, 35481, 35482, 35483,
    35484, 35485, 35486, 35488, 35489, 35490, 35491, 35492,
    35493, 35495, 35496, 35497, 35498, 35499, 35500, 35502,
    35503, 35504, 35505, 35506, 35507, 35509, 35510, 35511,
    35512, 35513, 35514, 35516, 35517, 35518, 35519, 35520,
    35521, 35523, 35524, 35525, 35526, 35527, 35528, 35530,
    35531, 35532, 35533, 35534, 35535, 35537, 35538, 35539,
    35540, 35541, 35542, 35544, 35545, 35546, 35547, 35548,
    35549, 35551, 35552, 35553, 35554, 35555, 35556, 35558,
    35559, 35560, 35561, 35562, 35563, 35565, 35566, 35567,
    35568, 35569, 35570, 35572, 35573, 35574, 35575, 35576,
    35577, 35579, 35580, 35581, 35582, 35583, 35585, 35586,
    35587, 35588, 35589, 35590, 35592, 35593, 35594, 35595,
    35596, 35597, 35599, 35600, 35601, 35602, 35603, 35604,
    35606, 35607, 35608, 35609, 35610, 35611, 35613, 35614,
    35615, 35616, 35617, 35618, 35620, 35621, 35622, 35623,
    35624, 35625, 35627, 35628, 35629, 35630, 35631, 35632,
    35634, 35635, 35636, 35637, 35638, 35639, 35641, 35642,
    35643, 35644, 35645, 35646, 35648, 35649, 35650, 35651,
    35652, 35653, 35655, 35656, 35657, 35658, 35659, 35660,
    35662, 35663, 35664, 35665, 35666, 35667, 35669, 35670,
    35671, 35672, 35673, 35674, 35676, 35677, 35678, 35679,
    35680, 35681, 35683, 35684, 35685, 35686, 35687, 35689,
    35690, 35691, 35692, 35693, 35694, 35696, 35697, 35698,
    35699, 35700, 35701, 35703, 35704, 35705, 35706, 35707,
    35708, 35710, 35711, 35712, 35713, 35714, 35715, 35717,
    35718, 35719, 35720, 35721, 35722, 35724, 35725, 35726,
    35727, 35728, 35729, 35731, 35732, 35733, 35734, 35735,
    35736, 35738, 35739, 35740, 35741, 35742, 35743, 35745,
    35746, 35747, 35748, 35749, 35750, 35752, 35753, 35754,
    35755, 35756, 35758, 35759, 35760, 35761, 35762, 35763,
    35765, 35766, 35767, 35768, 35769, 35770, 35772, 35773,
    35774, 35775, 35776, 35777, 35779, 35780, 35781, 35782,
    35783, 35784, 35786, 35787, 35788, 35789, 35790, 35791,
    35793, 35794, 35795, 35796, 35797, 35798, 35800, 35801,
    35802, 35803, 35804, 35805, 35807, 35808, 35809, 35810,
    35811, 35812, 35814, 35815, 35816, 35817, 35818, 35820,
    35821, 35822, 35823, 35824, 35825, 35827, 35828, 35829,
    35830, 35831, 35832, 35834, 35835, 35836, 35837, 35838,
    35839, 35841, 35842, 35843, 35844, 35845, 35846, 35848,
    35849, 35850, 35851, 35852, 35853, 35855, 35856, 35857,
    35858, 35859, 35860, 35862, 35863, 35864, 35865, 35866,
    35868, 35869, 35870, 35871, 35872, 35873, 35875, 35876,
    35877, 35878, 35879, 35880, 35882, 35883, 35884, 35885,
    35886, 35887, 35889, 35890, 35891, 35892, 35893, 35894,
    35896, 35897, 35898, 35899, 35900, 35901, 35903, 35904,
    35905, 35906, 35907, 35909, 35910, 35911, 35912, 35913,
    35914, 35916, 35917, 35918, 35919, 35920, 35921, 35923,
    35924, 35925, 35926, 35927, 35928, 35930, 35931, 35932,
    35933, 35934, 35935, 35937, 35938, 35939, 35940, 35941,
    35942, 35944, 35945, 35946, 35947, 35948, 35950, 35951,
    35952, 35953, 35954, 35955, 35957, 35958, 35959, 35960,
    35961, 35962, 35964, 35965, 35966, 35967, 35968, 35969,
    35971, 35972, 35973, 35974, 35975, 35976, 35978, 35979,
    35980, 35981, 35982, 35984, 35985, 35986, 35987, 35988,
    35989, 35991, 35992, 35993, 35994, 35995, 35996, 35998,
    35999, 36000, 36001, 36002, 36003, 36005, 36006, 36007,
    36008, 36009, 36010, 36012, 36013, 36014, 36015, 36016,
    36018, 36019, 36020, 36021, 36022, 36023, 36025, 36026,
    36027, 36028, 36029, 36030, 36032, 36033, 36034, 36035,
    36036, 36037, 36039, 36040, 36041, 36042, 36043, 36044,
    36046, 36047, 36048, 36049, 36050, 36052, 36053, 36054,
    36055, 36056, 36057, 36059, 36060, 36061, 36062, 36063,
    36064, 36066, 36067, 36068, 36069, 36070, 36071, 36073,
    36074, 36075, 36076, 36077, 36079, 36080, 36081, 36082,
    36083, 36084, 36086, 36087, 36088, 36089, 36090, 36091,
    36093, 36094, 36095, 36096, 36097, 36098, 36100, 36101,
    36102, 36103, 36104, 36106, 36107, 36108, 36109, 36110,
    36111, 36113, 36114, 36115, 36116, 36117, 36118, 36120,
    36121, 36122, 36123, 36124, 36125, 36127, 36128, 36129,
    36130, 36131, 36133, 36134, 36135, 36136, 36137, 36138,
    36140, 36141, 36142, 36143, 36144, 36145, 36147, 36148,
    36149, 36150, 36151, 36152, 36154, 36155, 36156, 36157,
    36158, 36160, 36161, 36162, 36163, 36164, 36165, 36167,
    36168, 36169, 36170, 36171, 36172, 36174, 36175, 36176,
    36177, 36178, 36179, 36181, 36182, 36183, 36184, 36185,
    36187, 36188, 36189, 36190, 36191, 36192, 36194, 36195,
    36196, 36197, 36198, 36199, 36201, 36202, 36203, 36204,
    36205, 36206, 36208, 36209, 36210, 36211, 36212, 36214,
    36215, 36216, 36217, 36218, 36219, 36221, 36222, 36223,
    36224, 36225, 36226, 36228, 36229, 36230, 36231, 36232,
    36234, 36235, 36236, 36237, 36238, 36239, 36241, 36242,
    36243, 36244, 36245, 36246, 36248, 36249, 36250, 36251,
    36252, 36253, 36255, 36256, 36257, 36258, 36259, 36261,
    36262, 36263, 36264, 36265, 36266, 36268, 36269, 36270,
    36271, 36272, 36273, 36275, 36276, 36277, 36278, 36279,
    36281, 36282, 36283, 36284, 36285, 36286, 36288, 36289,
    36290, 36291, 36292, 36293, 36295, 36296, 36297, 36298,
    36299, 36301, 36302, 36303, 36304, 36305, 36306, 36308,
    36309, 36310, 36311, 36312, 36313, 36315, 36316, 36317,
    36318, 36319, 36321, 36322, 36323, 36324, 36325, 36326,
    36328, 36329, 36330, 36331, 36332, 36333, 36335, 36336,
    36337, 36338, 36339, 36341, 36342, 36343, 36344, 36345,
    36346, 36348, 36349, 36350, 36351, 36352, 36353, 36355,
    36356, 36357, 36358, 36359, 36361, 36362, 36363, 36364,
    36365, 36366, 36368, 36369, 36370, 36371, 36372, 36373,
    36375, 36376, 36377, 36378, 36379, 36381, 36382, 36383,
    36384, 36385, 36386, 36388, 36389, 36390, 36391, 36392,
    36393, 36395, 36396, 36397, 36398, 36399, 36401, 36402,
    36403, 36404, 36405, 36406, 36408, 36409, 36410, 36411,
    36412, 36413, 36415, 36416, 36417, 36418, 36419, 36421,
    36422, 36423, 36424, 36425, 36426, 36428, 36429, 36430,
    36431, 36432, 36433, 36435, 36436, 36437, 36438, 36439,
    36441, 36442, 36443, 36444, 36445, 36446, 36448, 36449,
    36450, 36451, 36452, 36453, 36455, 36456, 36457, 36458,
    36459, 36461, 36462, 36463, 36464, 36465, 36466, 36468,
    36469, 36470, 36471, 36472, 36474, 36475, 36476, 36477,
    36478, 36479, 36481, 36482, 36483, 36484, 36485, 36486,
    36488, 36489, 36490, 36491, 36492, 36494, 36495, 36496,
    36497, 36498, 36499, 36501, 36502, 36503, 36504, 36505,
    36506, 36508, 36509, 36510, 36511, 36512, 36514, 36515,
    36516, 36517, 36518, 36519, 36521, 36522, 36523, 36524,
    36525, 36527, 36528, 36529, 36530, 36531, 36532, 36534,
    36535, 36536, 36537, 36538, 36539, 36541, 36542, 36543,
    36544, 36545, 36547, 36548, 36549, 36550, 36551, 36552,
    36554, 36555, 36556, 36557, 36558, 36560, 36561, 36562,
    36563, 36564, 36565, 36567, 36568, 36569, 36570, 36571,
    36572, 36574, 36575, 36576, 36577, 36578, 36580, 36581,
    36582, 36583, 36584, 36585, 36587, 36588, 36589, 36590,
    36591, 36593, 36594, 36595, 36596, 36597, 36598, 36600,
    36601, 36602, 36603, 36604, 36605, 36607, 36608, 36609,
    36610, 36611, 36613, 36614, 36615, 36616, 36617, 36618,
    36620, 36621, 36622, 36623, 36624, 36626, 36627, 36628,
    36629, 36630, 36631, 36633, 36634, 36635, 36636, 36637,
    36639, 36640, 36641, 36642, 36643, 36644, 36646, 36647,
    36648, 36649, 36650, 36651, 36653, 36654, 36655, 36656,
    36657, 36659, 36660, 36661, 36662, 36663, 36664, 36666,
    36667, 36668, 36669, 36670, 36672, 36673, 36674, 36675,
    36676, 36677, 36679, 36680, 36681, 36682, 36683, 36685,
    36686, 36687, 36688, 36689, 36690, 36692, 36693, 36694,
    36695, 36696, 36698, 36699, 36700, 36701, 36702, 36703,
    36705, 36706, 36707, 36708, 36709, 36710, 36712, 36713,
    36714, 36715, 36716, 36718, 36719, 36720, 36721, 36722,
    36723, 36725, 36726, 36727, 36728, 36729, 36731, 36732,
    36733, 36734, 36735, 36736, 36738, 36739, 36740, 36741,
    36742, 36744, 36745, 36746, 36747, 36748, 36749, 36751,
    36752, 36753, 36754, 36755, 36757, 36758, 36759, 36760,
    36761, 36762, 36764, 36765, 36766, 36767, 36768, 36770,
    36771, 36772, 36773, 36774, 36775, 36777, 36778, 36779,
    36780, 36781, 36783, 36784, 36785, 36786, 36787, 36788,
    36790, 36791, 36792, 36793, 36794, 36796, 36797, 36798,
    36799, 36800, 36801, 36803, 36804, 36805, 36806, 36807,
    36809, 36810, 36811, 36812, 36813, 36814, 36816, 36817,
    36818, 36819, 36820, 36822, 36823, 36824, 36825, 36826,
    36827, 36829, 36830, 36831, 36832, 36833, 36835, 36836,
    36837, 36838, 36839, 36840, 36842, 36843, 36844, 36845,
    36846, 36848, 36849, 36850, 36851, 36852, 36853, 36855,
    36856, 36857, 36858, 36859, 36861, 36862, 36863, 36864,
    36865, 36866, 36868, 36869, 36870, 36871, 36872, 36874,
    36875, 36876, 36877, 36878, 36879, 36881, 36882, 36883,
    36884, 36885, 36887, 36888, 36889, 36890, 36891, 36892,
    36894, 36895, 36896, 36897, 36898, 36900, 36901, 36902,
    36903, 36904, 36905, 36907, 36908, 36909, 36910, 36911,
    36913, 36914, 36915, 36916, 36917, 36918, 36920, 36921,
    36922, 36923, 36924, 36926, 36927, 36928, 36929, 36930,
    36931, 36933, 36934, 36935, 36936, 36937, 36939, 36940,
    36941, 36942, 36943, 36944, 36946, 36947, 36948, 36949,
    36950, 36952, 36953, 36954, 36955, 36956, 36957, 36959,
    36960, 36961, 36962, 36963, 36965, 36966, 36967, 36968,
    36969, 36971, 36972, 36973, 36974, 36975, 36976, 36978,
    36979, 36980, 36981, 36982, 36984, 36985, 36986, 36987,
    36988, 36989, 36991, 36992, 36993, 36994, 36995, 36997,
    36998, 36999, 37000, 37001, 37002, 37004, 37005, 37006,
    37007, 37008, 37010, 37011, 37012, 37013, 37014, 37015,
    37017, 37018, 37019, 37020, 37021, 37023, 37024, 37025,
    37026, 37027, 37029, 37030, 37031, 37032, 37033, 37034,
    37036, 37037, 37038, 37039, 37040, 37042, 37043, 37044,
    37045, 37046, 37047, 37049, 37050, 37051, 37052, 37053,
    37055, 37056, 37057, 37058, 37059, 37060, 37062, 37063,
    37064, 37065, 37066, 37068, 37069, 37070, 37071, 37072,
    37074, 37075, 37076, 37077, 37078, 37079, 37081, 37082,
    37083, 37084, 37085, 37087, 37088, 37089, 37090, 37091,
    37092, 37094, 37095, 37096, 37097, 37098, 37100, 37101,
    37102, 37103, 37104, 37106, 37107, 37108, 37109, 37110,
    37111, 37113, 37114, 37115, 37116, 37117, 37119, 37120,
    37121, 37122, 37123, 37124, 37126, 37127, 37128, 37129,
    37130, 37132, 37133, 37134, 37135, 37136, 37137, 37139,
    37140, 37141, 37142, 37143, 37145, 37146, 37147, 37148,
    37149, 37151, 37152, 37153, 37154, 37155, 37156, 37158,
    37159, 37160, 37161, 37162, 37164, 37165, 37166, 37167,
    37168, 37170, 37171, 37172, 37173, 37174, 37175, 37177,
    37178, 37179, 37180, 37181, 37183, 37184, 37185, 37186,
    37187, 37188, 37190, 37191, 37192, 37193, 37194, 37196,
    37197, 37198, 37199, 37200, 37202, 37203, 37204, 37205,
    37206, 37207, 37209, 37210, 37211, 37212, 37213, 37215,
    37216, 37217, 37218, 37219, 37221, 37222, 37223, 37224,
    37225, 37226, 37228, 37229, 37230, 37231, 37232, 37234,
    37235, 37236, 37237, 37238, 37239, 37241, 37242, 37243,
    37244, 37245, 37247, 37248, 37249, 37250, 37251, 37253,
    37254, 37255, 37256, 37257, 37258, 37260, 37261, 37262,
    37263, 37264, 37266, 37267, 37268, 37269, 37270, 37272,
    37273, 37274, 37275, 37276, 37277, 37279, 37280, 37281,
    37282, 37283, 37285, 37286, 37287, 37288, 37289, 37291,
    37292, 37293, 37294, 37295, 37296, 37298, 37299, 37300,
    37301, 37302, 37304, 37305, 37306, 37307, 37308, 37310,
    37311, 37312, 37313, 37314, 37315, 37317, 37318, 37319,
    37320, 37321, 37323, 37324, 37325, 37326, 37327, 37329,
    37330, 37331, 37332, 37333, 37334, 37336, 37337, 37338,
    37339, 37340, 37342, 37343, 37344, 37345, 37346, 37348,
    37349, 37350, 37351, 37352, 37353, 37355, 37356, 37357,
    37358, 37359, 37361, 37362, 37363, 37364, 37365, 37367,
    37368, 37369, 37370, 37371, 37372, 37374, 37375, 37376,
    37377, 37378, 37380, 37381, 37382, 37383, 37384, 37386,
    37387, 37388, 37389, 37390, 37391, 37393, 37394, 37395,
    37396, 37397, 37399, 37400, 37401, 37402, 37403, 37405,
    37406, 37407, 37408, 37409, 37410, 37412, 37413, 37414,
    37415, 37416, 37418, 37419, 37420, 37421, 37422, 37424,
    37425, 37426, 37427, 37428, 37429, 37431, 37432, 37433,
    37434, 37435, 37437, 37438, 37439, 37440, 37441, 37443,
    37444, 37445, 37446, 37447, 37449, 37450, 37451, 37452,
    37453, 37454, 37456, 37457, 37458, 37459, 37460, 37462,
    37463, 37464, 37465, 37466, 37468, 37469, 37470, 37471,
    37472, 37473, 37475, 37476, 37477, 37478, 37479, 37481,
    37482, 37483, 37484, 37485, 37487, 37488, 37489, 37490,
    37491, 37493, 37494, 37495, 37496, 37497, 37498, 37500,
    37501, 37502, 37503, 37504, 37506, 37507, 37508, 37509,
    37510, 37512, 37513, 37514, 37515, 37516, 37517, 37519,
    37520, 37521, 37522, 37523, 37525, 37526, 37527, 37528,
    37529, 37531, 37532, 37533, 37534, 37535, 37537, 37538,
    37539, 37540, 37541, 37542, 37544, 37545, 37546, 37547,
    37548, 37550, 37551, 37552, 37553, 37554, 37556, 37557,
    37558, 37559, 37560, 37562, 37563, 37564, 37565, 37566,
    37567, 37569, 37570, 37571, 37572, 37573, 37575, 37576,
    37577, 37578, 37579, 37581, 37582, 37583, 37584, 37585,
    37587, 37588, 37589, 37590, 37591, 37592, 37594, 37595,
    37596, 37597, 37598, 37600, 37601, 37602, 37603, 37604,
    37606, 37607, 37608, 37609, 37610, 37612, 37613, 37614,
    37615, 37616, 37617, 37619, 37620, 37621, 37622, 37623,
    37625, 37626, 37627, 37628, 37629, 37631, 37632, 37633,
    37634, 37635, 37637, 37638, 37639, 37640, 37641, 37642,
    37644, 37645, 37646, 37647, 37648, 37650, 37651, 37652,
    37653, 37654, 37656, 37657, 37658, 37659, 37660, 37662,
    37663, 37664, 37665, 37666, 37667, 37669, 37670, 37671,
    37672, 37673, 37675, 37676, 37677, 37678, 37679, 37681,
    37682, 37683, 37684, 37685, 37687, 37688, 37689, 37690,
    37691, 37693, 37694, 37695, 37696, 37697, 37698, 37700,
    37701, 37702, 37703, 37704, 37706, 37707, 37708, 37709,
    37710, 37712, 37713, 37714, 37715, 37716, 37718, 37719,
    37720, 37721, 37722, 37724, 37725, 37726, 37727, 37728,
    37729, 37731, 37732, 37733, 37734, 37735, 37737, 37738,
    37739, 37740, 37741, 37743, 37744, 37745, 37746, 37747,
    37749, 37750, 37751, 37752, 37753, 37755, 37756, 37757,
    37758, 37759, 37760, 37762, 37763, 37764, 37765, 37766,
    37768, 37769, 37770, 37771, 37772, 37774, 37775, 37776,
    37777, 37778, 37780, 37781, 37782, 37783, 37784, 37786,
    37787, 37788, 37789, 37790, 37791, 37793, 37794, 37795,
    37796, 37797, 37799, 37800, 37801, 37802, 37803, 37805,
    37806, 37807, 37808, 37809, 37811, 37812, 37813, 37814,
    37815, 37817, 37818, 37819, 37820, 37821, 37823, 37824,
    37825, 37826, 37827, 37828, 37830, 37831, 37832, 37833,
    37834, 37836, 37837, 37838, 37839, 37840, 37842, 37843,
    37844, 37845, 37846, 37848, 37849, 37850, 37851, 37852,
    37854, 37855, 37856, 37857, 37858, 37860, 37861, 37862,
    37863, 37864, 37865, 37867, 37868, 37869, 37870, 37871,
    37873, 37874, 37875, 37876, 37877, 37879, 37880, 37881,
    37882, 37883, 37885, 37886, 37887, 37888, 37889, 37891,
    37892, 37893, 37894, 37895, 37897, 37898, 37899, 37900,
    37901, 37902, 37904, 37905, 37906, 37907, 37908, 37910,
    37911, 37912, 37913, 37914, 37916, 37917, 37918, 37919,
    37920, 37922, 37923, 37924, 37925, 37926, 37928, 37929,
    37930, 37931, 37932, 37934, 37935, 37936, 37937, 37938,
    37940, 37941, 37942, 37943, 37944, 37945, 37947, 37948,
    37949, 37950, 37951, 37953, 37954, 37955, 37956, 37957,
    37959, 37960, 37961, 37962, 37963, 37965, 37966, 37967,
    37968, 37969, 37971, 37972, 37973, 37974, 37975, 37977,
    37978, 37979, 37980, 37981, 37983, 37984, 37985, 37986,
    37987, 37989, 37990, 37991, 37992, 37993, 37994, 37996,
    37997, 37998, 37999, 38000, 38002, 38003, 38004, 38005,
    38006, 38008, 38009, 38010, 38011, 38012, 38014, 38015,
    38016, 38017, 38018, 38020, 38021, 38022, 38023, 38024,
    38026, 38027, 38028, 38029, 38030, 38032, 38033, 38034,
    38035, 38036, 38038, 38039, 38040, 38041, 38042, 38044,
    38045, 38046, 38047, 38048, 38049, 38051, 38052, 38053,
    38054, 38055, 38057, 38058, 38059, 38060, 38061, 38063,
    38064, 38065, 38066, 38067, 38069, 38070, 38071, 38072,
    38073, 38075, 38076, 38077, 38078, 38079, 38081, 38082,
    38083, 38084, 38085, 38087, 38088, 38089, 38090, 38091,
    38093, 38094, 38095, 38096, 38097, 38099, 38100, 38101,
    38102, 38103, 38105, 38106, 38107, 38108, 38109, 38110,
    38112, 38113, 38114, 38115, 38116, 38118, 38119, 38120,
    38121, 38122, 38124, 38125, 38126, 38127, 38128, 38130,
    38131, 38132, 38133, 38134, 38136, 38137, 38138, 38139,
    38140, 38142, 38143, 38144, 38145, 38146, 38148, 38149,
    38150, 38151, 38152, 38154, 38155, 38156, 38157, 38158,
    38160, 38161, 38162, 38163, 38164, 38166, 38167, 38168,
    38169, 38170, 38172, 38173, 38174, 38175, 38176, 38178,
    38179, 38180, 38181, 38182, 38184, 38185, 38186, 38187,
    38188, 38190, 38191, 38192, 38193, 38194, 38196, 38197,
    38198, 38199, 38200, 38201, 38203, 38204, 38205, 38206,
    38207, 38209, 38210, 38211, 38212, 38213, 38215, 38216,
    38217, 38218, 38219, 38221, 38222, 38223, 38224, 38225,
    38227, 38228, 38229, 38230, 38231, 38233, 38234, 38235,
    38236, 38237, 38239, 38240, 38241, 38242, 38243, 38245,
    38246, 38247, 38248, 38249, 38251, 38252, 38253, 38254,
    38255, 38257, 38258, 38259, 38260, 38261, 38263, 38264,
    38265, 38266, 38267, 38269, 38270, 38271, 38272, 38273,
    38275, 38276, 38277, 38278, 38279, 38281, 38282, 38283,
    38284, 38285, 38287, 38288, 38289, 38290, 38291, 38293,
    38294, 38295, 38296, 38297, 38299, 38300, 38301, 38302,
    38303, 38305, 38306, 38307, 38308, 38309, 38311, 38312,
    38313, 38314, 38315, 38317, 38318, 38319, 38320, 38321,
    38323, 38324, 38325, 38326, 38327, 38329, 38330, 38331,
    38332, 38333, 38335, 38336, 38337, 38338, 38339, 38341,
    38342, 38343, 38344, 38345, 38347, 38348, 38349, 38350,
    38351, 38353, 38354, 38355, 38356, 38357, 38359, 38360,
    38361, 38362, 38363, 38365, 38366, 38367, 38368, 38369,
    38371, 38372, 38373, 38374, 38375, 38377, 38378, 38379,
    38380, 38381, 38383, 38384, 38385, 38386, 38387, 38389,
    38390, 38391, 38392, 38393, 38395, 38396, 38397, 38398,
    38399, 38401, 38402, 38403, 38404, 38405, 38407, 38408,
    38409, 38410, 38411, 38413, 38414, 38415, 38416, 38417,
    38419, 38420, 38421, 38422, 38423, 38425, 38426, 38427,
    38428, 38429, 38431, 38432, 38433, 38434, 38435, 38437,
    38438, 38439, 38440, 38441, 38443, 38444, 38445, 38446,
    38447, 38449, 38450, 38451, 38452, 38453, 38455, 38456,
    38457, 38458, 38459, 38461, 38462, 38463, 38464, 38465,
    38467, 38468, 38469, 38470, 38471, 38473, 38474, 38475,
    38476, 38477, 38479, 38480, 38481, 38482, 38483, 38485,
    38486, 38487, 38488, 38489, 38491, 38492, 38493, 38494,
    38495, 38497, 38498, 38499, 38500, 38501, 38503, 38504,
    38505, 38506, 38507, 38509, 38510, 38511, 38512, 38513,
    38515, 38516, 38517, 38518, 38519, 38521, 38522, 38523,
    38524, 38525, 38527, 38528, 38529, 38530, 38531, 38533,
    38534, 38535, 38536, 38537, 38539, 38540, 38541, 38542,
    38543, 38545, 38546, 38547, 38548, 38549, 38551, 38552,
    38553, 38554, 38555, 38557, 38558, 38559, 38560, 38561,
    38563, 38564, 38565, 38566, 38567, 38569, 38570, 38571,
    38572, 38574, 38575, 38576, 38577, 38578, 38580, 38581,
    38582, 38583, 38584, 38586, 38587, 38588, 38589, 38590,
    38592, 38593, 38594, 38595, 38596, 38598, 38599, 38600,
    38601, 38602, 38604, 38605, 38606, 38607, 38608, 38610,
    38611, 38612, 38613, 38614, 38616, 38617, 38618, 38619,
    38620, 38622, 38623, 38624, 38625, 38626, 38628, 38629,
    38630, 38631, 38632, 38634, 38635, 38636, 38637, 38638,
    38640, 38641, 38642, 38643, 38644, 38646, 38647, 38648,
    38649, 38650, 38652, 38653, 38654, 38655, 38657, 38658,
    38659, 38660, 38661, 38663, 38664, 38665, 38666, 38667,
    38669, 38670, 38671, 38672, 38673, 38675, 38676, 38677,
    38678, 38679, 38681, 38682, 38683, 38684, 38685, 38687,
    38688, 38689, 38690, 38691, 38693, 38694, 38695, 38696,
    38697, 38699, 38700, 38701, 38702, 38703, 38705, 38706,
    38707, 38708, 38709, 38711, 38712, 38713, 38714, 38715,
    38717, 38718, 38719, 38720, 38722, 38723, 38724, 38725,
    38726, 38728, 38729, 38730, 38731, 38732, 38734, 38735,
    38736, 38737, 38738, 38740, 38741, 38742, 38743, 38744,
    38746, 38747, 38748, 38749, 38750, 38752, 38753, 38754,
    38755, 38756, 38758, 38759, 38760, 38761, 38762, 38764,
    38765, 38766, 38767, 38768, 38770, 38771, 38772, 38773,
    38775, 38776, 38777, 38778, 38779, 38781, 38782, 38783,
    38784, 38785, 38787, 38788, 38789, 38790, 38791, 38793,
    38794, 38795, 38796, 38797, 38799, 38800, 38801, 38802,
    38803, 38805, 38806, 38807, 38808, 38809, 38811, 38812,
    38813, 38814, 38815, 38817, 38818, 38819, 38820, 38821,
    38823, 38824, 38825, 38826, 38828, 38829, 38830, 38831,
    38832, 38834, 38835, 38836, 38837, 38838, 38840, 38841,
    38842, 38843, 38844, 38846, 38847, 38848, 38849, 38850,
    38852, 38853, 38854, 38855, 38856, 38858, 38859, 38860,
    38861, 38862, 38864, 38865, 38866, 38867, 38869, 38870,
    38871, 38872, 38873, 38875, 38876, 38877, 38878, 38879,
    38881, 38882, 38883, 38884, 38885, 38887, 38888, 38889,
    38890, 38891, 38893, 38894, 38895, 38896, 38897, 38899,
    38900, 38901, 38902, 38903, 38905, 38906, 38907, 38908,
    38910, 38911, 38912, 38913, 38914, 38916, 38917, 38918,
    38919, 38920, 38922, 38923, 38924, 38925, 38926, 38928,
    38929, 38930, 38931, 38932, 38934, 38935, 38936, 38937,
    38938, 38940, 38941, 38942, 38943, 38945, 38946, 38947,
    38948, 38949, 38951, 38952, 38953, 38954, 38955, 38957,
    38958, 38959, 38960, 38961, 38963, 38964, 38965, 38966,
    38967, 38969, 38970, 38971, 38972, 38973, 38975, 38976,
    38977, 38978, 38980, 38981, 38982, 38983, 38984, 38986,
    38987, 38988, 38989, 38990, 38992, 38993, 38994, 38995,
    38996, 38998, 38999, 39000, 39001, 39002, 39004, 39005,
    39006, 39007, 39009, 39010, 39011, 39012, 39013, 39015,
    39016, 39017, 39018, 39019, 39021, 39022, 39023, 39024,
    39025, 39027, 39028, 39029, 39030, 39031, 39033, 39034,
    39035, 39036, 39038, 39039, 39040, 39041, 39042, 39044,
    39045, 39046, 39047, 39048, 39050, 39051, 39052, 39053,
    39054, 39056, 39057, 39058, 39059, 39060, 39062, 39063,
    39064, 39065, 39067, 39068, 39069, 39070, 39071, 39073,
    39074, 39075, 39076, 39077, 39079, 39080, 39081, 39082,
    39083, 39085, 39086, 39087, 39088, 39089, 39091, 39092,
    39093, 39094, 39096, 39097, 39098, 39099, 39100, 39102,
    39103, 39104, 39105, 39106, 39108, 39109, 39110, 39111,
    39112, 39114, 39115, 39116, 39117, 39118, 39120, 39121,
    39122, 39123, 39125, 39126, 39127, 39128, 39129, 39131,
    39132, 39133, 39134, 39135, 39137, 39138, 39139, 39140,
    39141, 39143, 39144, 39145, 39146, 39147, 39149, 39150,
    39151, 39152, 39154, 39155, 39156, 39157, 39158, 39160,
    39161, 39162, 39163, 39164, 39166, 39167, 39168, 39169,
    39170, 39172, 39173, 39174, 39175, 39177, 39178, 39179,
    39180, 39181, 39183, 39184, 39185, 39186, 39187, 39189,
    39190, 39191, 39192, 39193, 39195, 39196, 39197, 39198,
    39200, 39201, 39202, 39203, 39204, 39206, 39207, 39208,
    39209, 39210, 39212, 39213, 39214, 39215, 39216, 39218,
    39219, 39220, 39221, 39223, 39224, 39225, 39226, 39227,
    39229, 39230, 39231, 39232, 39233, 39235, 39236, 39237,
    39238, 39239, 39241, 39242, 39243, 39244, 39246, 39247,
    39248, 39249, 39250, 39252, 39253, 39254, 39255, 39256,
    39258, 39259, 39260, 39261, 39262, 39264, 39265, 39266,
    39267, 39269, 39270, 39271, 39272, 39273, 39275, 39276,
    39277, 39278, 39279, 39281, 39282, 39283, 39284, 39285,
    39287, 39288, 39289, 39290, 39292, 39293, 39294, 39295,
    39296, 39298, 39299, 39300, 39301, 39302, 39304, 39305,
    39306, 39307, 39308, 39310, 39311, 39312, 39313, 39315,
    39316, 39317, 39318, 39319, 39321, 39322, 39323, 39324,
    39325, 39327, 39328, 39329, 39330, 39332, 39333, 39334,
    39335, 39336, 39338, 39339, 39340, 39341, 39342, 39344,
    39345, 39346, 39347, 39348, 39350, 39351, 39352, 39353,
    39355, 39356, 39357, 39358, 39359, 39361, 39362, 39363,
    39364, 39365, 39367, 39368, 39369, 39370, 39372, 39373,
    39374, 39375, 39376, 39378, 39379, 39380, 39381, 39382,
    39384, 39385, 39386, 39387, 39388, 39390, 39391, 39392,
    39393, 39395, 39396, 39397, 39398, 39399, 39401, 39402,
    39403, 39404, 39405, 39407, 39408, 39409, 39410, 39412,
    39413, 39414, 39415, 39416, 39418, 39419, 39420, 39421,
    39422, 39424, 39425, 39426, 39427, 39428, 39430, 39431,
    39432, 39433, 39435, 39436, 39437, 39438, 39439, 39441,
    39442, 39443, 39444, 39445, 39447, 39448, 39449, 39450,
    39452, 39453, 39454, 39455, 39456, 39458, 39459, 39460,
    39461, 39462, 39464, 39465, 39466, 39467, 39469, 39470,
    39471, 39472, 39473, 39475, 39476, 39477, 39478, 39479,
    39481, 39482, 39483, 39484, 39486, 39487, 39488, 39489,
    39490, 39492, 39493, 39494, 39495, 39496, 39498, 39499,
    39500, 39501, 39503, 39504, 39505, 39506, 39507, 39509,
    39510, 39511, 39512, 39513, 39515, 39516, 39517, 39518,
    39520, 39521, 39522, 39523, 39524, 39526, 39527, 39528,
    39529, 39530, 39532, 39533, 39534, 39535, 39537, 39538,
    39539, 39540, 39541, 39543, 39544, 39545, 39546, 39547,
    39549, 39550, 39551, 39552, 39554, 39555, 39556, 39557,
    39558, 39560, 39561, 39562, 39563, 39564, 39566, 39567,
    39568, 39569, 39571, 39572, 39573, 39574, 39575, 39577,
    39578, 39579, 39580, 39581, 39583, 39584, 39585, 39586,
    39588, 39589, 39590, 39591, 39592, 39594, 39595, 39596,
    39597, 39598, 39600, 39601, 39602, 39603, 39605, 39606,
    39607, 39608, 39609, 39611, 39612, 39613, 39614, 39615,
    39617, 39618, 39619, 39620, 39622, 39623, 39624, 39625,
    39626, 39628, 39629, 39630, 39631, 39633, 39634, 39635,
    39636, 39637, 39639, 39640, 39641, 39642, 39643, 39645,
    39646, 39647, 39648, 39650, 39651, 39652, 39653, 39654,
    39656, 39657, 39658, 39659, 39660, 39662, 39663, 39664,
    39665, 39667, 39668, 39669, 39670, 39671, 39673, 39674,
    39675, 39676, 39677, 39679, 39680, 39681, 39682, 39684,
    39685, 39686, 39687, 39688, 39690, 39691, 39692, 39693,
    39695, 39696, 39697, 39698, 39699, 39701, 39702, 39703,
    39704, 39705, 39707, 39708, 39709, 39710, 39712, 39713,
    39714, 39715, 39716, 39718, 39719, 39720, 39721, 39722,
    39724, 39725, 39726, 39727, 39729, 39730, 39731, 39732,
    39733, 39735, 39736, 39737, 39738, 39740, 39741, 39742,
    39743, 39744, 39746, 39747, 39748, 39749, 39750, 39752,
    39753, 39754, 39755, 39757, 39758, 39759, 39760, 39761,
    39763, 39764, 39765, 39766, 39768, 39769, 39770, 39771,
    39772, 39774, 39775, 39776, 39777, 39778, 39780, 39781,
    39782, 39783, 39785, 39786, 39787, 39788, 39789, 39791,
    39792, 39793, 39794, 39796, 39797, 39798, 39799, 39800,
    39802, 39803, 39804, 39805, 39806, 39808, 39809, 39810,
    39811, 39813, 39814, 39815, 39816, 39817, 39819, 39820,
    39821, 39822, 39824, 39825, 39826, 39827, 39828, 39830,
    39831, 39832, 39833, 39835, 39836, 39837, 39838, 39839,
    39841, 39842, 39843, 39844, 39845, 39847, 39848, 39849,
    39850, 39852, 39853, 39854, 39855, 39856, 39858, 39859,
    39860, 39861, 39863, 39864, 39865, 39866, 39867, 39869,
    39870, 39871, 39872, 39873, 39875, 39876, 39877, 39878,
    39880, 39881, 39882, 39883, 39884, 39886, 39887, 39888,
    39889, 39891, 39892, 39893, 39894, 39895, 39897, 39898,
    39899, 39900, 39902, 39903, 39904, 39905, 39906, 39908,
    39909, 39910, 39911, 39913, 39914, 39915, 39916, 39917,
    39919, 39920, 39921, 39922, 39923, 39925, 39926, 39927,
    39928, 39930, 39931, 39932, 39933, 39934, 39936, 39937,
    39938, 39939, 39941, 39942, 39943, 39944, 39945, 39947,
    39948, 39949, 39950, 39952, 39953, 39954, 39955, 39956,
    39958, 39959, 39960, 39961, 39963, 39964, 39965, 39966,
    39967, 39969, 39970, 39971, 39972, 39973, 39975, 39976,
    39977, 39978, 39980, 39981, 39982, 39983, 39984, 39986,
    39987, 39988, 39989, 39991, 39992, 39993, 39994, 39995,
    39997, 39998, 39999, 40000, 40002, 40003, 40004, 40005,
    40006, 40008, 40009, 40010, 40011, 40013, 40014, 40015,
    40016, 40017, 40019, 40020, 40021, 40022, 40024, 40025,
    40026, 40027, 40028, 40030, 40031, 40032, 40033, 40035,
    40036, 40037, 40038, 40039, 40041, 40042, 40043, 40044,
    40045, 40047, 40048, 40049, 40050, 40052, 40053, 40054,
    40055, 40056, 40058, 40059, 40060, 40061, 40063, 40064,
    40065, 40066, 40067, 40069, 40070, 40071, 40072, 40074,
    40075, 40076, 40077, 40078, 40080, 40081, 40082, 40083,
    40085, 40086, 40087, 40088, 40089, 40091, 40092, 40093,
    40094, 40096, 40097, 40098, 40099, 40100, 40102, 40103,
    40104, 40105, 40107, 40108, 40109, 40110, 40111, 40113,
    40114, 40115, 40116, 40118, 40119, 40120, 40121, 40122,
    40124, 40125, 40126, 40127, 40129, 40130, 40131, 40132,
    40133, 40135, 40136, 40137, 40138, 40140, 40141, 40142,
    40143, 40144, 40146, 40147, 40148, 40149, 40151, 40152,
    40153, 40154, 40155, 40157, 40158, 40159, 40160, 40162,
    40163, 40164, 40165, 40166, 40168, 40169, 40170, 40171,
    40173, 40174, 40175, 40176, 40177, 40179, 40180, 40181,
    40182, 40184, 40185, 40186, 40187, 40188, 40190, 40191,
    40192, 40193, 40195, 40196, 40197, 40198, 40199, 40201,
    40202, 40203, 40204, 40206, 40207, 40208, 40209, 40210,
    40212, 40213, 40214, 40215, 40217, 40218, 40219, 40220,
    40221, 40223, 40224, 40225, 40226, 40228, 40229, 40230,
    40231, 40232, 40234, 40235, 40236, 40237, 40239, 40240,
    40241, 40242, 40243, 40245, 40246, 40247, 40248, 40250,
    40251, 40252, 40253, 40255, 40256, 40257, 40258, 40259,
    40261, 40262, 40263, 40264, 40266, 40267, 40268, 40269,
    40270, 40272, 40273, 40274, 40275, 40277, 40278, 40279,
    40280, 40281, 40283, 40284, 40285, 40286, 40288, 40289,
    40290, 40291, 40292, 40294, 40295, 40296, 40297, 40299,
    40300, 40301, 40302, 40303, 40305, 40306, 40307, 40308,
    40310, 40311, 40312, 40313, 40314, 40316, 40317, 40318,
    40319, 40321, 40322, 40323, 40324, 40326, 40327, 40328,
    40329, 40330, 40332, 40333, 40334, 40335, 40337, 40338,
    40339, 40340, 40341, 40343, 40344, 40345, 40346, 40348,
    40349, 40350, 40351, 40352, 40354, 40355, 40356, 40357,
    40359, 40360, 40361, 40362, 40363, 40365, 40366, 40367,
    40368, 40370, 40371, 40372, 40373, 40374, 40376, 40377,
    40378, 40379, 40381, 40382, 40383, 40384, 40386, 40387,
    40388, 40389, 40390, 40392, 40393, 40394, 40395, 40397,
    40398, 40399, 40400, 40401, 40403, 40404, 40405, 40406,
    40408, 40409, 40410, 40411, 40412, 40414, 40415, 40416,
    40417, 40419, 40420, 40421, 40422, 40424, 40425, 40426,
    40427, 40428, 40430, 40431, 40432, 40433, 40435, 40436,
    40437, 40438, 40439, 40441, 40442, 40443, 40444, 40446,
    40447, 40448, 40449, 40450, 40452, 40453, 40454, 40455,
    40457, 40458, 40459, 40460, 40462, 40463, 40464, 40465,
    40466, 40468, 40469, 40470, 40471, 40473, 40474, 40475,
    40476, 40477, 40479, 40480, 40481, 40482, 40484, 40485,
    40486, 40487, 40489, 40490, 40491, 40492, 40493, 40495,
    40496, 40497, 40498, 40500, 40501, 40502, 40503, 40504,
    40506, 40507, 40508, 40509, 40511, 40512, 40513, 40514,
    40516, 40517, 40518, 40519, 40520, 40522, 40523, 40524,
    40525, 40527, 40528, 40529, 40530, 40531, 40533, 40534,
    40535, 40536, 40538, 40539, 40540, 40541, 40543, 40544,
    40545, 40546, 40547, 40549, 40550, 40551, 40552, 40554,
    40555, 40556, 40557, 40558, 40560, 40561, 40562, 40563,
    40565, 40566, 40567, 40568, 40570, 40571, 40572, 40573,
    40574, 40576, 40577, 40578, 40579, 40581, 40582, 40583,
    40584, 40585, 40587, 40588, 40589, 40590, 40592, 40593,
    40594, 40595, 40597, 40598, 40599, 40600, 40601, 40603,
    40604, 40605, 40606, 40608, 40609, 40610, 40611, 40613,
    40614, 40615, 40616, 40617, 40619, 40620, 40621, 40622,
    40624, 40625, 40626, 40627, 40628, 40630, 40631, 40632,
    40633, 40635, 40636, 40637, 40638, 40640, 40641, 40642,
    40643, 40644, 40646, 40647, 40648, 40649, 40651, 40652,
    40653, 40654, 40656, 40657, 40658, 40659, 40660, 40662,
    40663, 40664, 40665, 40667, 40668, 40669, 40670, 40671,
    40673, 40674, 40675, 40676, 40678, 40679, 40680, 40681,
    40683, 40684, 40685, 40686, 40687, 40689, 40690, 40691,
    40692, 40694, 40695, 40696, 40697, 40699, 40700, 40701,
    40702, 40703, 40705, 40706, 40707, 40708, 40710, 40711,
    40712, 40713, 40715, 40716, 40717, 40718, 40719, 40721,
    40722, 40723, 40724, 40726, 40727, 40728, 40729, 40731,
    40732, 40733, 40734, 40735, 40737, 40738, 40739, 40740,
    40742, 40743, 40744, 40745, 40747, 40748, 40749, 40750,
    40751, 40753, 40754, 40755, 40756, 40758, 40759, 40760,
    40761, 40762, 40764, 40765, 40766, 40767, 40769, 40770,
    40771, 40772, 40774, 40775, 40776, 40777, 40778, 40780,
    40781, 40782, 40783, 40785, 40786, 40787, 40788, 40790,
    40791, 40792, 40793, 40794, 40796, 40797, 40798, 40799,
    40801, 40802, 40803, 40804, 40806, 40807, 40808, 40809,
    40810, 40812, 40813, 40814, 40815, 40817, 40818, 40819,
    40820, 40822, 40823, 40824, 40825, 40827, 40828, 40829,
    40830, 40831, 40833, 40834, 40835, 40836, 40838, 40839,
    40840, 40841, 40843, 40844, 40845, 40846, 40847, 40849,
    40850, 40851, 40852, 40854, 40855, 40856, 40857, 40859,
    40860, 40861, 40862, 40863, 40865, 40866, 40867, 40868,
    40870, 40871, 40872, 40873, 40875, 40876, 40877, 40878,
    40879, 40881, 40882, 40883, 40884, 40886, 40887, 40888,
    40889, 40891, 40892, 40893, 40894, 40895, 40897, 40898,
    40899, 40900, 40902, 40903, 40904, 40905, 40907, 40908,
    40909, 40910, 40912, 40913, 40914, 40915, 40916, 40918,
    40919, 40920, 40921, 40923, 40924, 40925, 40926, 40928,
    40929, 40930, 40931, 40932, 40934, 40935, 40936, 40937,
    40939, 40940, 40941, 40942, 40944, 40945, 40946, 40947,
    40948, 40950, 40951, 40952, 40953, 40955, 40956, 40957,
    40958, 40960, 40961, 40962, 40963, 40965, 40966, 40967,
    40968, 40969, 40971, 40972, 40973, 40974, 40976, 40977,
    40978, 40979, 40981, 40982, 40983, 40984, 40985, 40987,
    40988, 40989, 40990, 40992, 40993, 40994, 40995, 40997,
    40998, 40999, 41000, 41002, 41003, 41004, 41005, 41006,
    41008, 41009, 41010, 41011, 41013, 41014, 41015, 41016,
    41018, 41019, 41020, 41021, 41022, 41024, 41025, 41026,
    41027, 41029, 41030, 41031, 41032, 41034, 41035, 41036,
    41037, 41039, 41040, 41041, 41042, 41043, 41045, 41046,
    41047, 41048, 41050, 41051, 41052, 41053, 41055, 41056,
    41057, 41058, 41060, 41061, 41062, 41063, 41064, 41066,
    41067, 41068, 41069, 41071, 41072, 41073, 41074, 41076,
    41077, 41078, 41079, 41081, 41082, 41083, 41084, 41085,
    41087, 41088, 41089, 41090, 41092, 41093, 41094, 41095,
    41097, 41098, 41099, 41100, 41101, 41103, 41104, 41105,
    41106, 41108, 41109, 41110, 41111, 41113, 41114, 41115,
    41116, 41118, 41119, 41120, 41121, 41122, 41124, 41125,
    41126, 41127, 41129, 41130, 41131, 41132, 41134, 41135,
    41136, 41137, 41139, 41140, 41141, 41142, 41143, 41145,
    41146, 41147, 41148, 41150, 41151, 41152, 41153, 41155,
    41156, 41157, 41158, 41160, 41161, 41162, 41163, 41165,
    41166, 41167, 41168, 41169, 41171, 41172, 41173, 41174,
    41176, 41177, 41178, 41179, 41181, 41182, 41183, 41184,
    41186, 41187, 41188, 41189, 41190, 41192, 41193, 41194,
    41195, 41197, 41198, 41199, 41200, 41202, 41203, 41204,
    41205, 41207, 41208, 41209, 41210, 41211, 41213, 41214,
    41215, 41216, 41218, 41219, 41220, 41221, 41223, 41224,
    41225, 41226, 41228, 41229, 41230, 41231, 41233, 41234,
    41235, 41236, 41237, 41239, 41240, 41241, 41242, 41244,
    41245, 41246, 41247, 41249, 41250, 41251, 41252, 41254,
    41255, 41256, 41257, 41258, 41260, 41261, 41262, 41263,
    41265, 41266, 41267, 41268, 41270, 41271, 41272, 41273,
    41275, 41276, 41277, 41278, 41280, 41281, 41282, 41283,
    41284, 41286, 41287, 41288, 41289, 41291, 41292, 41293,
    41294, 41296, 41297, 41298, 41299, 41301, 41302, 41303,
    41304, 41306, 41307, 41308, 41309, 41310, 41312, 41313,
    41314, 41315, 41317, 41318, 41319, 41320, 41322, 41323,
    41324, 41325, 41327, 41328, 41329, 41330, 41332, 41333,
    41334, 41335, 41336, 41338, 41339, 41340, 41341, 41343,
    41344, 41345, 41346, 41348, 41349, 41350, 41351, 41353,
    41354, 41355, 41356, 41358, 41359, 41360, 41361, 41362,
    41364, 41365, 41366, 41367, 41369, 41370, 41371, 41372,
    41374, 41375, 41376, 41377, 41379, 41380, 41381, 41382,
    41384, 41385, 41386, 41387, 41388, 41390, 41391, 41392,
    41393, 41395, 41396, 41397, 41398, 41400, 41401, 41402,
    41403, 41405, 41406, 41407, 41408, 41410, 41411, 41412,
    41413, 41415, 41416, 41417, 41418, 41419, 41421, 41422,
    41423, 41424, 41426, 41427, 41428, 41429, 41431, 41432,
    41433, 41434, 41436, 41437, 41438, 41439, 41441, 41442,
    41443, 41444, 41445, 41447, 41448, 41449, 41450, 41452,
    41453, 41454, 41455, 41457, 41458, 41459, 41460, 41462,
    41463, 41464, 41465, 41467, 41468, 41469, 41470, 41472,
    41473, 41474, 41475, 41476, 41478, 41479, 41480, 41481,
    41483, 41484, 41485, 41486, 41488, 41489, 41490, 41491,
    41493, 41494, 41495, 41496, 41498, 41499, 41500, 41501,
    41503, 41504, 41505, 41506, 41508, 41509, 41510, 41511,
    41512, 41514, 41515, 41516, 41517, 41519, 41520, 41521,
    41522, 41524, 41525, 41526, 41527, 41529, 41530, 41531,
    41532, 41534, 41535, 41536, 41537, 41539, 41540, 41541,
    41542, 41543, 41545, 41546, 41547, 41548, 41550, 41551,
    41552, 41553, 41555, 41556, 41557, 41558, 41560, 41561,
    41562, 41563, 41565, 41566, 41567, 41568, 41570, 41571,
    41572, 41573, 41575, 41576, 41577, 41578, 41579, 41581,
    41582, 41583, 41584, 41586, 41587, 41588, 41589, 41591,
    41592, 41593, 41594, 41596, 41597, 41598, 41599, 41601,
    41602, 41603, 41604, 41606, 41607, 41608, 41609, 41611,
    41612, 41613, 41614, 41616, 41617, 41618, 41619, 41620,
    41622, 41623, 41624, 41625, 41627, 41628, 41629, 41630,
    41632, 41633, 41634, 41635, 41637, 41638, 41639, 41640,
    41642, 41643, 41644, 41645, 41647, 41648, 41649, 41650,
    41652, 41653, 41654, 41655, 41657, 41658, 41659, 41660,
    41661, 41663, 41664, 41665, 41666, 41668, 41669, 41670,
    41671, 41673, 41674, 41675, 41676, 41678, 41679, 41680,
    41681, 41683, 41684, 41685, 41686, 41688, 41689, 41690,
    41691, 41693, 41694, 41695, 41696, 41698, 41699, 41700,
    41701, 41702, 41704, 41705, 41706, 41707, 41709, 41710,
    41711, 41712, 41714, 41715, 41716, 41717, 41719, 41720,
    41721, 41722, 41724, 41725, 41726, 41727, 41729, 41730,
    41731, 41732, 41734, 41735, 41736, 41737, 41739, 41740,
    41741, 41742, 41744, 41745, 41746, 41747, 41749, 41750,
    41751, 41752, 41753, 41755, 41756, 41757, 41758, 41760,
    41761, 41762, 41763, 41765, 41766, 41767, 41768, 41770,
    41771, 41772, 41773, 41775, 41776, 41777, 41778, 41780,
    41781, 41782, 41783, 41785, 41786, 41787, 41788, 41790,
    41791, 41792, 41793, 41795, 41796, 41797, 41798, 41800,
    41801, 41802, 41803, 41805, 41806, 41807, 41808, 41809,
    41811, 41812, 41813, 41814, 41816, 41817, 41818, 41819,
    41821, 41822, 41823, 41824, 41826, 41827, 41828, 41829,
    41831, 41832, 41833, 41834, 41836, 41837, 41838, 41839,
    41841, 41842, 41843, 41844, 41846, 41847, 41848, 41849,
    41851, 41852, 41853, 41854, 41856, 41857, 41858, 41859,
    41861, 41862, 41863, 41864, 41866, 41867, 41868, 41869,
    41871, 41872, 41873, 41874, 41875, 41877, 41878, 41879,
    41880, 41882, 41883, 41884, 41885, 41887, 41888, 41889,
    41890, 41892, 41893, 41894, 41895, 41897, 41898, 41899,
    41900, 41902, 41903, 41904, 41905, 41907, 41908, 41909,
    41910, 41912, 41913, 41914, 41915, 41917, 41918, 41919,
    41920, 41922, 41923, 41924, 41925, 41927, 41928, 41929,
    41930, 41932, 41933, 41934, 41935, 41937, 41938, 41939,
    41940, 41942, 41943, 41944, 41945, 41947, 41948, 41949,
    41950, 41952, 41953, 41954, 41955, 41957, 41958, 41959,
    41960, 41961, 41963, 41964, 41965, 41966, 41968, 41969,
    41970, 41971, 41973, 41974, 41975, 41976, 41978, 41979,
    41980, 41981, 41983, 41984, 41985, 41986, 41988, 41989,
    41990, 41991, 41993, 41994, 41995, 41996, 41998, 41999,
    42000, 42001, 42003, 42004, 42005, 42006, 42008, 42009,
    42010, 42011, 42013, 42014, 42015, 42016, 42018, 42019,
    42020, 42021, 42023, 42024, 42025, 42026, 42028, 42029,
    42030, 42031, 42033, 42034, 42035, 42036, 42038, 42039,
    42040, 42041, 42043, 42044, 42045, 42046, 42048, 42049,
    42050, 42051, 42053, 42054, 42055, 42056, 42058, 42059,
    42060, 42061, 42063, 42064, 42065, 42066, 42068, 42069,
    42070, 42071, 42073, 42074, 42075, 42076, 42078, 42079,
    42080, 42081, 42083, 42084, 42085, 42086, 42088, 42089,
    42090, 42091, 42093, 42094, 42095, 42096, 42098, 42099,
    42100, 42101, 42103, 42104, 42105, 42106, 42108, 42109,
    42110, 42111, 42113, 42114, 42115, 42116, 42118, 42119,
    42120, 42121, 42123, 42124, 42125, 42126, 42127, 42129,
    42130, 42131, 42132, 42134, 42135, 42136, 42137, 42139,
    42140, 42141, 42142, 42144, 42145, 42146, 42147, 42149,
    42150, 42151, 42152, 42154, 42155, 42156, 42157, 42159,
    42160, 42161, 42162, 42164, 42165, 42166, 42167, 42169,
    42170, 42171, 42172, 42174, 42175, 42176, 42177, 42179,
    42180, 42181, 42182, 42184, 42185, 42186, 42187, 42189,
    42190, 42191, 42192, 42194, 42195, 42196, 42197, 42199,
    42200, 42201, 42202, 42204, 42205, 42206, 42207, 42209,
    42210, 42211, 42212, 42214, 42215, 42216, 42218, 42219,
    42220, 42221, 42223, 42224, 42225, 42226, 42228, 42229,
    42230, 42231, 42233, 42234, 42235, 42236, 42238, 42239,
    42240, 42241, 42243, 42244, 42245, 42246, 42248, 42249,
    42250, 42251, 42253, 42254, 42255, 42256, 42258, 42259,
    42260, 42261, 42263, 42264, 42265, 42266, 42268, 42269,
    42270, 42271, 42273, 42274, 42275, 42276, 42278, 42279,
    42280, 42281, 42283, 42284, 42285, 42286, 42288, 42289,
    42290, 42291, 42293, 42294, 42295, 42296, 42298, 42299,
    42300, 42301, 42303, 42304, 42305, 42306, 42308, 42309,
    42310, 42311, 42313, 42314, 42315, 42316, 42318, 42319,
    42320, 42321, 42323, 42324, 42325, 42326, 42328, 42329,
    42330, 42331, 42333, 42334, 42335, 42336, 42338, 42339,
    42340, 42341, 42343, 42344, 42345, 42346, 42348, 42349,
    42350, 42351, 42353, 42354, 42355, 42356, 42358, 42359,
    42360, 42361, 42363, 42364, 42365, 42366, 42368, 42369,
    42370, 42371, 42373, 42374, 42375, 42376, 42378, 42379,
    42380, 42381, 42383, 42384, 42385, 42387, 42388, 42389,
    42390, 42392, 42393, 42394, 42395, 42397, 42398, 42399,
    42400, 42402, 42403, 42404, 42405, 42407, 42408, 42409,
    42410, 42412, 42413, 42414, 42415, 42417, 42418, 42419,
    42420, 42422, 42423, 42424, 42425, 42427, 42428, 42429,
    42430, 42432, 42433, 42434, 42435, 42437, 42438, 42439,
    42440, 42442, 42443, 42444, 42445, 42447, 42448, 42449,
    42450, 42452, 42453, 42454, 42455, 42457, 42458, 42459,
    42460, 42462, 42463, 42464, 42465, 42467, 42468, 42469,
    42470, 42472, 42473, 42474, 42476, 42477, 42478, 42479,
    42481, 42482, 42483, 42484, 42486, 42487, 42488, 42489,
    42491, 42492, 42493, 42494, 42496, 42497, 42498, 42499,
    42501, 42502, 42503, 42504, 42506, 42507, 42508, 42509,
    42511, 42512, 42513, 42514, 42516, 42517, 42518, 42519,
    42521, 42522, 42523, 42524, 42526, 42527, 42528, 42529,
    42531, 42532, 42533, 42534, 42536, 42537, 42538, 42540,
    42541, 42542, 42543, 42545, 42546, 42547, 42548, 42550,
    42551, 42552, 42553, 42555, 42556, 42557, 42558, 42560,
    42561, 42562, 42563, 42565, 42566, 42567, 42568, 42570,
    42571, 42572, 42573, 42575, 42576, 42577, 42578, 42580,
    42581, 42582, 42583, 42585, 42586, 42587, 42588, 42590,
    42591, 42592, 42594, 42595, 42596, 42597, 42599, 42600,
    42601, 42602, 42604, 42605, 42606, 42607, 42609, 42610,
    42611, 42612, 42614, 42615, 42616, 42617, 42619, 42620,
    42621, 42622, 42624, 42625, 42626, 42627, 42629, 42630,
    42631, 42632, 42634, 42635, 42636, 42637, 42639, 42640,
    42641, 42643, 42644, 42645, 42646, 42648, 42649, 42650,
    42651, 42653, 42654, 42655, 42656, 42658, 42659, 42660,
    42661, 42663, 42664, 42665, 42666, 42668, 42669, 42670,
    42671, 42673, 42674, 42675, 42676, 42678, 42679, 42680,
    42681, 42683, 42684, 42685, 42687, 42688, 42689, 42690,
    42692, 42693, 42694, 42695, 42697, 42698, 42699, 42700,
    42702, 42703, 42704, 42705, 42707, 42708, 42709, 42710,
    42712, 42713, 42714, 42715, 42717, 42718, 42719, 42720,
    42722, 42723, 42724, 42725, 42727, 42728, 42729, 42731,
    42732, 42733, 42734, 42736, 42737, 42738, 42739, 42741,
    42742, 42743, 42744, 42746, 42747, 42748, 42749, 42751,
    42752, 42753, 42754, 42756, 42757, 42758, 42759, 42761,
    42762, 42763, 42765, 42766, 42767, 42768, 42770, 42771,
    42772, 42773, 42775, 42776, 42777, 42778, 42780, 42781,
    42782, 42783, 42785, 42786, 42787, 42788, 42790, 42791,
    42792, 42793, 42795, 42796, 42797, 42798, 42800, 42801,
    42802, 42804, 42805, 42806, 42807, 42809, 42810, 42811,
    42812, 42814, 42815, 42816, 42817, 42819, 42820, 42821,
    42822, 42824, 42825, 42826, 42827, 42829, 42830, 42831,
    42832, 42834, 42835, 42836, 42838, 42839, 42840, 42841,
    42843, 42844, 42845, 42846, 42848, 42849, 42850, 42851,
    42853, 42854, 42855, 42856, 42858, 42859, 42860, 42861,
    42863, 42864, 42865, 42867, 42868, 42869, 42870, 42872,
    42873, 42874, 42875, 42877, 42878, 42879, 42880, 42882,
    42883, 42884, 42885, 42887, 42888, 42889, 42890, 42892,
    42893, 42894, 42895, 42897, 42898, 42899, 42901, 42902,
    42903, 42904, 42906, 42907, 42908, 42909, 42911, 42912,
    42913, 42914, 42916, 42917, 42918, 42919, 42921, 42922,
    42923, 42924, 42926, 42927, 42928, 42930, 42931, 42932,
    42933, 42935, 42936, 42937, 42938, 42940, 42941, 42942,
    42943, 42945, 42946, 42947, 42948, 42950, 42951, 42952,
    42954, 42955, 42956, 42957, 42959, 42960, 42961, 42962,
    42964, 42965, 42966, 42967, 42969, 42970, 42971, 42972,
    42974, 42975, 42976, 42977, 42979, 42980, 42981, 42983,
    42984, 42985, 42986, 42988, 42989, 42990, 42991, 42993,
    42994, 42995, 42996, 42998, 42999, 43000, 43001, 43003,
    43004, 43005, 43006, 43008, 43009, 43010, 43012, 43013,
    43014, 43015, 43017, 43018, 43019, 43020, 43022, 43023,
    43024, 43025, 43027, 43028, 43029, 43030, 43032, 43033,
    43034, 43036, 43037, 43038, 43039, 43041, 43042, 43043,
    43044, 43046, 43047, 43048, 43049, 43051, 43052, 43053,
    43054, 43056, 43057, 43058, 43060, 43061, 43062, 43063,
    43065, 43066, 43067, 43068, 43070, 43071, 43072, 43073,
    43075, 43076, 43077, 43078, 43080, 43081, 43082, 43084,
    43085, 43086, 43087, 43089, 43090, 43091, 43092, 43094,
    43095, 43096, 43097, 43099, 43100, 43101, 43102, 43104,
    43105, 43106, 43108, 43109, 43110, 43111, 43113, 43114,
    43115, 43116, 43118, 43119, 43120, 43121, 43123, 43124,
    43125, 43126, 43128, 43129, 43130, 43132, 43133, 43134,
    43135, 43137, 43138, 43139, 43140, 43142, 43143, 43144,
    43145, 43147, 43148, 43149, 43151, 43152, 43153, 43154,
    43156, 43157, 43158, 43159, 43161, 43162, 43163, 43164,
    43166, 43167, 43168, 43169, 43171, 43172, 43173, 43175,
    43176, 43177, 43178, 43180, 43181, 43182, 43183, 43185,
    43186, 43187, 43188, 43190, 43191, 43192, 43194, 43195,
    43196, 43197, 43199, 43200, 43201, 43202, 43204, 43205,
    43206, 43207, 43209, 43210, 43211, 43212, 43214, 43215,
    43216, 43218, 43219, 43220, 43221, 43223, 43224, 43225,
    43226, 43228, 43229, 43230, 43231, 43233, 43234, 43235,
    43237, 43238, 43239, 43240, 43242, 43243, 43244, 43245,
    43247, 43248, 43249, 43250, 43252, 43253, 43254, 43256,
    43257, 43258, 43259, 43261, 43262, 43263, 43264, 43266,
    43267, 43268, 43269, 43271, 43272, 43273, 43274, 43276,
    43277, 43278, 43280, 43281, 43282, 43283, 43285, 43286,
    43287, 43288, 43290, 43291, 43292, 43293, 43295, 43296,
    43297, 43299, 43300, 43301, 43302, 43304, 43305, 43306,
    43307, 43309, 43310, 43311, 43312, 43314, 43315, 43316,
    43318, 43319, 43320, 43321, 43323, 43324, 43325, 43326,
    43328, 43329, 43330, 43331, 43333, 43334, 43335, 43337,
    43338, 43339, 43340, 43342, 43343, 43344, 43345, 43347,
    43348, 43349, 43350, 43352, 43353, 43354, 43356, 43357,
    43358, 43359, 43361, 43362, 43363, 43364, 43366, 43367,
    43368, 43370, 43371, 43372, 43373, 43375, 43376, 43377,
    43378, 43380, 43381, 43382, 43383, 43385, 43386, 43387,
    43389, 43390, 43391, 43392, 43394, 43395, 43396, 43397,
    43399, 43400, 43401, 43402, 43404, 43405, 43406, 43408,
    43409, 43410, 43411, 43413, 43414, 43415, 43416, 43418,
    43419, 43420, 43421, 43423, 43424, 43425, 43427, 43428,
    43429, 43430, 43432, 43433, 43434, 43435, 43437, 43438,
    43439, 43441, 43442, 43443, 43444, 43446, 43447, 43448,
    43449, 43451, 43452, 43453, 43454, 43456, 43457, 43458,
    43460, 43461, 43462, 43463, 43465, 43466, 43467, 43468,
    43470, 43471, 43472, 43474, 43475, 43476, 43477, 43479,
    43480, 43481, 43482, 43484, 43485, 43486, 43487, 43489,
    43490, 43491, 43493, 43494, 43495, 43496, 43498, 43499,
    43500, 43501, 43503, 43504, 43505, 43507, 43508, 43509,
    43510, 43512, 43513, 43514, 43515, 43517, 43518, 43519,
    43520, 43522, 43523, 43524, 43526, 43527, 43528, 43529,
    43531, 43532, 43533, 43534, 43536, 43537, 43538, 43540,
    43541, 43542, 43543, 43545, 43546, 43547, 43548, 43550,
    43551, 43552, 43554, 43555, 43556, 43557, 43559, 43560,
    43561, 43562, 43564, 43565, 43566, 43567, 43569, 43570,
    43571, 43573, 43574, 43575, 43576, 43578, 43579, 43580,
    43581, 43583, 43584, 43585, 43587, 43588, 43589, 43590,
    43592, 43593, 43594, 43595, 43597, 43598, 43599, 43601,
    43602, 43603, 43604, 43606, 43607, 43608, 43609, 43611,
    43612, 43613, 43615, 43616, 43617, 43618, 43620, 43621,
    43622, 43623, 43625, 43626, 43627, 43628, 43630, 43631,
    43632, 43634, 43635, 43636, 43637, 43639, 43640, 43641,
    43642, 43644, 43645, 43646, 43648, 43649, 43650, 43651,
    43653, 43654, 43655, 43656, 43658, 43659, 43660, 43662,
    43663, 43664, 43665, 43667, 43668, 43669, 43670, 43672,
    43673, 43674, 43676, 43677, 43678, 43679, 43681, 43682,
    43683, 43684, 43686, 43687, 43688, 43690, 43691, 43692,
    43693, 43695, 43696, 43697, 43698, 43700, 43701, 43702,
    43704, 43705, 43706, 43707, 43709, 43710, 43711, 43712,
    43714, 43715, 43716, 43718, 43719, 43720, 43721, 43723,
    43724, 43725, 43726, 43728, 43729, 43730, 43732, 43733,
    43734, 43735, 43737, 43738, 43739, 43740, 43742, 43743,
    43744, 43746, 43747, 43748, 43749, 43751, 43752, 43753,
    43754, 43756, 43757, 43758, 43760, 43761, 43762, 43763,
    43765, 43766, 43767, 43768, 43770, 43771, 43772, 43774,
    43775, 43776, 43777, 43779, 43780, 43781, 43782, 43784,
    43785, 43786, 43788, 43789, 43790, 43791, 43793, 43794,
    43795, 43797, 43798, 43799, 43800, 43802, 43803, 43804,
    43805, 43807, 43808, 43809, 43811, 43812, 43813, 43814,
    43816, 43817, 43818, 43819, 43821, 43822, 43823, 43825,
    43826, 43827, 43828, 43830, 43831, 43832, 43833, 43835,
    43836, 43837, 43839, 43840, 43841, 43842, 43844, 43845,
    43846, 43847, 43849, 43850, 43851, 43853, 43854, 43855,
    43856, 43858, 43859, 43860, 43862, 43863, 43864, 43865,
    43867, 43868, 43869, 43870, 43872, 43873, 43874, 43876,
    43877, 43878, 43879, 43881, 43882, 43883, 43884, 43886,
    43887, 43888, 43890, 43891, 43892, 43893, 43895, 43896,
    43897, 43898, 43900, 43901, 43902, 43904, 43905, 43906,
    43907, 43909, 43910, 43911, 43913, 43914, 43915, 43916,
    43918, 43919, 43920, 43921, 43923, 43924, 43925, 43927,
    43928, 43929, 43930, 43932, 43933, 43934, 43935, 43937,
    43938, 43939, 43941, 43942, 43943, 43944, 43946, 43947,
    43948, 43950, 43951, 43952, 43953, 43955, 43956, 43957,
    43958, 43960, 43961, 43962, 43964, 43965, 43966, 43967,
    43969, 43970, 43971, 43973, 43974, 43975, 43976, 43978,
    43979, 43980, 43981, 43983, 43984, 43985, 43987, 43988,
    43989, 43990, 43992, 43993, 43994, 43995, 43997, 43998,
    43999, 44001, 44002, 44003, 44004, 44006, 44007, 44008,
    44010, 44011, 44012, 44013, 44015, 44016, 44017, 44018,
    44020, 44021, 44022, 44024, 44025, 44026, 44027, 44029,
    44030, 44031, 44033, 44034, 44035, 44036, 44038, 44039,
    44040, 44041, 44043, 44044, 44045, 44047, 44048, 44049,
    44050, 44052, 44053, 44054, 44056, 44057, 44058, 44059,
    44061, 44062, 44063, 44064, 44066, 44067, 44068, 44070,
    44071, 44072, 44073, 44075, 44076, 44077, 44079, 44080,
    44081, 44082, 44084, 44085, 44086, 44088, 44089, 44090,
    44091, 44093, 44094, 44095, 44096, 44098, 44099, 44100,
    44102, 44103, 44104, 44105, 44107, 44108, 44109, 44111,
    44112, 44113, 44114, 44116, 44117, 44118, 44119, 44121,
    44122, 44123, 44125, 44126, 44127, 44128, 44130, 44131,
    44132, 44134, 44135, 44136, 44137, 44139, 44140, 44141,
    44143, 44144, 44145, 44146, 44148, 44149, 44150, 44151,
    44153, 44154, 44155, 44157, 44158, 44159, 44160, 44162,
    44163, 44164, 44166, 44167, 44168, 44169, 44171, 44172,
    44173, 44174, 44176, 44177, 44178, 44180, 44181, 44182,
    44183, 44185, 44186, 44187, 44189, 44190, 44191, 44192,
    44194, 44195, 44196, 44198, 44199, 44200, 44201, 44203,
    44204, 44205, 44206, 44208, 44209, 44210, 44212, 44213,
    44214, 44215, 44217, 44218, 44219, 44221, 44222, 44223,
    44224, 44226, 44227, 44228, 44230, 44231, 44232, 44233,
    44235, 44236, 44237, 44239, 44240, 44241, 44242, 44244,
    44245, 44246, 44247, 44249, 44250, 44251, 44253, 44254,
    44255, 44256, 44258, 44259, 44260, 44262, 44263, 44264,
    44265, 44267, 44268, 44269, 44271, 44272, 44273, 44274,
    44276, 44277, 44278, 44280, 44281, 44282, 44283, 44285,
    44286, 44287, 44288, 44290, 44291, 44292, 44294, 44295,
    44296, 44297, 44299, 44300, 44301, 44303, 44304, 44305,
    44306, 44308, 44309, 44310, 44312, 44313, 44314, 44315,
    44317, 44318, 44319, 44321, 44322, 44323, 44324, 44326,
    44327, 44328, 44330, 44331, 44332, 44333, 44335, 44336,
    44337, 44338, 44340, 44341, 44342, 44344, 44345, 44346,
    44347, 44349, 44350, 44351, 44353, 44354, 44355, 44356,
    44358, 44359, 44360, 44362, 44363, 44364, 44365, 44367,
    44368, 44369, 44371, 44372, 44373, 44374, 44376, 44377,
    44378, 44380, 44381, 44382, 44383, 44385, 44386, 44387,
    44389, 44390, 44391, 44392, 44394, 44395, 44396, 44398,
    44399, 44400, 44401, 44403, 44404, 44405, 44406, 44408,
    44409, 44410, 44412, 44413, 44414, 44415, 44417, 44418,
    44419, 44421, 44422, 44423, 44424, 44426, 44427, 44428,
    44430, 44431, 44432, 44433, 44435, 44436, 44437, 44439,
    44440, 44441, 44442, 44444, 44445, 44446, 44448, 44449,
    44450, 44451, 44453, 44454, 44455, 44457, 44458, 44459,
    44460, 44462, 44463, 44464, 44466, 44467, 44468, 44469,
    44471, 44472, 44473, 44475, 44476, 44477, 44478, 44480,
    44481, 44482, 44484, 44485, 44486, 44487, 44489, 44490,
    44491, 44493, 44494, 44495, 44496, 44498, 44499, 44500,
    44502, 44503, 44504, 44505, 44507, 44508, 44509, 44511,
    44512, 44513, 44514, 44516, 44517, 44518, 44520, 44521,
    44522, 44523, 44525, 44526, 44527, 44529, 44530, 44531,
    44532, 44534, 44535, 44536, 44538, 44539, 44540, 44541,
    44543, 44544, 44545, 44547, 44548, 44549, 44550, 44552,
    44553, 44554, 44556, 44557, 44558, 44559, 44561, 44562,
    44563, 44565, 44566, 44567, 44568, 44570, 44571, 44572,
    44574, 44575, 44576, 44577, 44579, 44580, 44581, 44583,
    44584, 44585, 44586, 44588, 44589, 44590, 44592, 44593,
    44594, 44595, 44597, 44598, 44599, 44601, 44602, 44603,
    44604, 44606, 44607, 44608, 44610, 44611, 44612, 44613,
    44615, 44616, 44617, 44619, 44620, 44621, 44622, 44624,
    44625, 44626, 44628, 44629, 44630, 44631, 44633, 44634,
    44635, 44637, 44638, 44639, 44640, 44642, 44643, 44644,
    44646, 44647, 44648, 44649, 44651, 44652, 44653, 44655,
    44656, 44657, 44658, 44660, 44661, 44662, 44664, 44665,
    44666, 44667, 44669, 44670, 44671, 44673, 44674, 44675,
    44676, 44678, 44679, 44680, 44682, 44683, 44684, 44686,
    44687, 44688, 44689, 44691, 44692, 44693, 44695, 44696,
    44697, 44698, 44700, 44701, 44702, 44704, 44705, 44706,
    44707, 44709, 44710, 44711, 44713, 44714, 44715, 44716,
    44718, 44719, 44720, 44722, 44723, 44724, 44725, 44727,
    44728, 44729, 44731, 44732, 44733, 44734, 44736, 44737,
    44738, 44740, 44741, 44742, 44743, 44745, 44746, 44747,
    44749, 44750, 44751, 44753, 44754, 44755, 44756, 44758,
    44759, 44760, 44762, 44763, 44764, 44765, 44767, 44768,
    44769, 44771, 44772, 44773, 44774, 44776, 44777, 44778,
    44780, 44781, 44782, 44783, 44785, 44786, 44787, 44789,
    44790, 44791, 44792, 44794, 44795, 44796, 44798, 44799,
    44800, 44802, 44803, 44804, 44805, 44807, 44808, 44809,
    44811, 44812, 44813, 44814, 44816, 44817, 44818, 44820,
    44821, 44822, 44823, 44825, 44826, 44827, 44829, 44830,
    44831, 44832, 44834, 44835, 44836, 44838, 44839, 44840,
    44841, 44843, 44844, 44845, 44847, 44848, 44849, 44851,
    44852, 44853, 44854, 44856, 44857, 44858, 44860, 44861,
    44862, 44863, 44865, 44866, 44867, 44869, 44870, 44871,
    44872, 44874, 44875, 44876, 44878, 44879, 44880, 44882,
    44883, 44884, 44885, 44887, 44888, 44889, 44891, 44892,
    44893, 44894, 44896, 44897, 44898, 44900, 44901, 44902,
    44903, 44905, 44906, 44907, 44909, 44910, 44911, 44913,
    44914, 44915, 44916, 44918, 44919, 44920, 44922, 44923,
    44924, 44925, 44927, 44928, 44929, 44931, 44932, 44933,
    44934, 44936, 44937, 44938, 44940, 44941, 44942, 44944,
    44945, 44946, 44947, 44949, 44950, 44951, 44953, 44954,
    44955, 44956, 44958, 44959, 44960, 44962, 44963, 44964,
    44965, 44967, 44968, 44969, 44971, 44972, 44973, 44975,
    44976, 44977, 44978, 44980, 44981, 44982, 44984, 44985,
    44986, 44987, 44989, 44990, 44991, 44993, 44994, 44995,
    44997, 44998, 44999, 45000, 45002, 45003, 45004, 45006,
    45007, 45008, 45009, 45011, 45012, 45013, 45015, 45016,
    45017, 45018, 45020, 45021, 45022, 45024, 45025, 45026,
    45028, 45029, 45030, 45031, 45033, 45034, 45035, 45037,
    45038, 45039, 45040, 45042, 45043, 45044, 45046, 45047,
    45048, 45050, 45051, 45052, 45053, 45055, 45056, 45057,
    45059, 45060, 45061, 45062, 45064, 45065, 45066, 45068,
    45069, 45070, 45072, 45073, 45074, 45075, 45077, 45078,
    45079, 45081, 45082, 45083, 45084, 45086, 45087, 45088,
    45090, 45091, 45092, 45094, 45095, 45096, 45097, 45099,
    45100, 45101, 45103, 45104, 45105, 45106, 45108, 45109,
    45110, 45112, 45113, 45114, 45116, 45117, 45118, 45119,
    45121, 45122, 45123, 45125, 45126, 45127, 45128, 45130,
    45131, 45132, 45134, 45135, 45136, 45138, 45139, 45140,
    45141, 45143, 45144, 45145, 45147, 45148, 45149, 45151,
    45152, 45153, 45154, 45156, 45157, 45158, 45160, 45161,
    45162, 45163, 45165, 45166, 45167, 45169, 45170, 45171,
    45173, 45174, 45175, 45176, 45178, 45179, 45180, 45182,
    45183, 45184, 45186, 45187, 45188, 45189, 45191, 45192,
    45193, 45195, 45196, 45197, 45198, 45200, 45201, 45202,
    45204, 45205, 45206, 45208, 45209, 45210, 45211, 45213,
    45214, 45215, 45217, 45218, 45219, 45221, 45222, 45223,
    45224, 45226, 45227, 45228, 45230, 45231, 45232, 45233,
    45235, 45236, 45237, 45239, 45240, 45241, 45243, 45244,
    45245, 45246, 45248, 45249, 45250, 45252, 45253, 45254,
    45256, 45257, 45258, 45259, 45261, 45262, 45263, 45265,
    45266, 45267, 45268, 45270, 45271, 45272, 45274, 45275,
    45276, 45278, 45279, 45280, 45281, 45283, 45284, 45285,
    45287, 45288, 45289, 45291, 45292, 45293, 45294, 45296,
    45297, 45298, 45300, 45301, 45302, 45304, 45305, 45306,
    45307, 45309, 45310, 45311, 45313, 45314, 45315, 45317,
    45318, 45319, 45320, 45322, 45323, 45324, 45326, 45327,
    45328, 45329, 45331, 45332, 45333, 45335, 45336, 45337,
    45339, 45340, 45341, 45342, 45344, 45345, 45346, 45348,
    45349, 45350, 45352, 45353, 45354, 45355, 45357, 45358,
    45359, 45361, 45362, 45363, 45365, 45366, 45367, 45368,
    45370, 45371, 45372, 45374, 45375, 45376, 45378, 45379,
    45380, 45381, 45383, 45384, 45385, 45387, 45388, 45389,
    45391, 45392, 45393, 45394, 45396, 45397, 45398, 45400,
    45401, 45402, 45404, 45405, 45406, 45407, 45409, 45410,
    45411, 45413, 45414, 45415, 45417, 45418, 45419, 45420,
    45422, 45423, 45424, 45426, 45427, 45428, 45430, 45431,
    45432, 45433, 45435, 45436, 45437, 45439, 45440, 45441,
    45443, 45444, 45445, 45446, 45448, 45449, 45450, 45452,
    45453, 45454, 45456, 45457, 45458, 45459, 45461, 45462,
    45463, 45465, 45466, 45467, 45469, 45470, 45471, 45472,
    45474, 45475, 45476, 45478, 45479, 45480, 45482, 45483,
    45484, 45485, 45487, 45488, 45489, 45491, 45492, 45493,
    45495, 45496, 45497, 45498, 45500, 45501, 45502, 45504,
    45505, 45506, 45508, 45509, 45510, 45511, 45513, 45514,
    45515, 45517, 45518, 45519, 45521, 45522, 45523, 45524,
    45526, 45527, 45528, 45530, 45531, 45532, 45534, 45535,
    45536, 45538, 45539, 45540, 45541, 45543, 45544, 45545,
    45547, 45548, 45549, 45551, 45552, 45553, 45554, 45556,
    45557, 45558, 45560, 45561, 45562, 45564, 45565, 45566,
    45567, 45569, 45570, 45571, 45573, 45574, 45575, 45577,
    45578, 45579, 45580, 45582, 45583, 45584, 45586, 45587,
    45588, 45590, 45591, 45592, 45594, 45595, 45596, 45597,
    45599, 45600, 45601, 45603, 45604, 45605, 45607, 45608,
    45609, 45610, 45612, 45613, 45614, 45616, 45617, 45618,
    45620, 45621, 45622, 45623, 45625, 45626, 45627, 45629,
    45630, 45631, 45633, 45634, 45635, 45637, 45638, 45639,
    45640, 45642, 45643, 45644, 45646, 45647, 45648, 45650,
    45651, 45652, 45653, 45655, 45656, 45657, 45659, 45660,
    45661, 45663, 45664, 45665, 45667, 45668, 45669, 45670,
    45672, 45673, 45674, 45676, 45677, 45678, 45680, 45681,
    45682, 45683, 45685, 45686, 45687, 45689, 45690, 45691,
    45693, 45694, 45695, 45697, 45698, 45699, 45700, 45702,
    45703, 45704, 45706, 45707, 45708, 45710, 45711, 45712,
    45713, 45715, 45716, 45717, 45719, 45720, 45721, 45723,
    45724, 45725, 45727, 45728, 45729, 45730, 45732, 45733,
    45734, 45736, 45737, 45738, 45740, 45741, 45742, 45743,
    45745, 45746, 45747, 45749, 45750, 45751, 45753, 45754,
    45755, 45757, 45758, 45759, 45760, 45762, 45763, 45764,
    45766, 45767, 45768, 45770, 45771, 45772, 45774, 45775,
    45776, 45777, 45779, 45780, 45781, 45783, 45784, 45785,
    45787, 45788, 45789, 45790, 45792, 45793, 45794, 45796,
    45797, 45798, 45800, 45801, 45802, 45804, 45805, 45806,
    45807, 45809, 45810, 45811, 45813, 45814, 45815, 45817,
    45818, 45819, 45821, 45822, 45823, 45824, 45826, 45827,
    45828, 45830, 45831, 45832, 45834, 45835, 45836, 45838,
    45839, 45840, 45841, 45843, 45844, 45845, 45847, 45848,
    45849, 45851, 45852, 45853, 45855, 45856, 45857, 45858,
    45860, 45861, 45862, 45864, 45865, 45866, 45868, 45869,
    45870, 45871, 45873, 45874, 45875, 45877, 45878, 45879,
    45881, 45882, 45883, 45885, 45886, 45887, 45888, 45890,
    45891, 45892, 45894, 45895, 45896, 45898, 45899, 45900,
    45902, 45903, 45904, 45905, 45907, 45908, 45909, 45911,
    45912, 45913, 45915, 45916, 45917, 45919, 45920, 45921,
    45923, 45924, 45925, 45926, 45928, 45929, 45930, 45932,
    45933, 45934, 45936, 45937, 45938, 45940, 45941, 45942,
    45943, 45945, 45946, 45947, 45949, 45950, 45951, 45953,
    45954, 45955, 45957, 45958, 45959, 45960, 45962, 45963,
    45964, 45966, 45967, 45968, 45970, 45971, 45972, 45974,
    45975, 45976, 45977, 45979, 45980, 45981, 45983, 45984,
    45985, 45987, 45988, 45989, 45991, 45992, 45993, 45994,
    45996, 45997, 45998, 46000, 46001, 46002, 46004, 46005,
    46006, 46008, 46009, 46010, 46012, 46013, 46014, 46015,
    46017, 46018, 46019, 46021, 46022, 46023, 46025, 46026,
    46027, 46029, 46030, 46031, 46032, 46034, 46035, 46036,
    46038, 46039, 46040, 46042, 46043, 46044, 46046, 46047,
    46048, 46050, 46051, 46052, 46053, 46055, 46056, 46057,
    46059, 46060, 46061, 46063, 46064, 46065, 46067, 46068,
    46069, 46070, 46072, 46073, 46074, 46076, 46077, 46078,
    46080, 46081, 46082, 46084, 46085, 46086, 46088, 46089,
    46090, 46091, 46093, 46094, 46095, 46097, 46098, 46099,
    46101, 46102, 46103, 46105, 46106, 46107, 46108, 46110,
    46111, 46112, 46114, 46115, 46116, 46118, 46119, 46120,
    46122, 46123, 46124, 46126, 46127, 46128, 46129, 46131,
    46132, 46133, 46135, 46136, 46137, 46139, 46140, 46141,
    46143, 46144, 46145, 46147, 46148, 46149, 46150, 46152,
    46153, 46154, 46156, 46157, 46158, 46160, 46161, 46162,
    46164, 46165, 46166, 46168, 46169, 46170, 46171, 46173,
    46174, 46175, 46177, 46178, 46179, 46181, 46182, 46183,
    46185, 46186, 46187, 46189, 46190, 46191, 46192, 46194,
    46195, 46196, 46198, 46199, 46200, 46202, 46203, 46204,
    46206, 46207, 46208, 46210, 46211, 46212, 46213, 46215,
    46216, 46217, 46219, 46220, 46221, 46223, 46224, 46225,
    46227, 46228, 46229, 46231, 46232, 46233, 46234, 46236,
    46237, 46238, 46240, 46241, 46242, 46244, 46245, 46246,
    46248, 46249, 46250, 46252, 46253, 46254, 46256, 46257,
    46258, 46259, 46261, 46262, 46263, 46265, 46266, 46267,
    46269, 46270, 46271, 46273, 46274, 46275, 46277, 46278,
    46279, 46280, 46282, 46283, 46284, 46286, 46287, 46288,
    46290, 46291, 46292, 46294, 46295, 46296, 46298, 46299,
    46300, 46302, 46303, 46304, 46305, 46307, 46308, 46309,
    46311, 46312, 46313, 46315, 46316, 46317, 46319, 46320,
    46321, 46323, 46324, 46325, 46326, 46328, 46329, 46330,
    46332, 46333, 46334, 46336, 46337, 46338, 46340, 46341,
    46342, 46344, 46345, 46346, 46348, 46349, 46350, 46351,
    46353, 46354, 46355, 46357, 46358, 46359, 46361, 46362,
    46363, 46365, 46366, 46367, 46369, 46370, 46371, 46373,
    46374, 46375, 46376, 46378, 46379, 46380, 46382, 46383,
    46384, 46386, 46387, 46388, 46390, 46391, 46392, 46394,
    46395, 46396, 46398, 46399, 46400, 46401, 46403, 46404,
    46405, 46407, 46408, 46409, 46411, 46412, 46413, 46415,
    46416, 46417, 46419, 46420, 46421, 46423, 46424, 46425,
    46427, 46428, 46429, 46430, 46432, 46433, 46434, 46436,
    46437, 46438, 46440, 46441, 46442, 46444, 46445, 46446,
    46448, 46449, 46450, 46452, 46453, 46454, 46455, 46457,
    46458, 46459, 46461, 46462, 46463, 46465, 46466, 46467,
    46469, 46470, 46471, 46473, 46474, 46475, 46477, 46478,
    46479, 46481, 46482, 46483, 46484, 46486, 46487, 46488,
    46490, 46491, 46492, 46494, 46495, 46496, 46498, 46499,
    46500, 46502, 46503, 46504, 46506, 46507, 46508, 46510,
    46511, 46512, 46513, 46515, 46516, 46517, 46519, 46520,
    46521, 46523, 46524, 46525, 46527, 46528, 46529, 46531,
    46532, 46533, 46535, 46536, 46537, 46539, 46540, 46541,
    46542, 46544, 46545, 46546, 46548, 46549, 46550, 46552,
    46553, 46554, 46556, 46557, 46558, 46560, 46561, 46562,
    46564, 46565, 46566, 46568, 46569, 46570, 46572, 46573,
    46574, 46575, 46577, 46578, 46579, 46581, 46582, 46583,
    46585, 46586, 46587, 46589, 46590, 46591, 46593, 46594,
    46595, 46597, 46598, 46599, 46601, 46602, 46603, 46604,
    46606, 46607, 46608, 46610, 46611, 46612, 46614, 46615,
    46616, 46618, 46619, 46620, 46622, 46623, 46624, 46626,
    46627, 46628, 46630, 46631, 46632, 46634, 46635, 46636,
    46638, 46639, 46640, 46641, 46643, 46644, 46645, 46647,
    46648, 46649, 46651, 46652, 46653, 46655, 46656, 46657,
    46659, 46660, 46661, 46663, 46664, 46665, 46667, 46668,
    46669, 46671, 46672, 46673, 46674, 46676, 46677, 46678,
    46680, 46681, 46682, 46684, 46685, 46686, 46688, 46689,
    46690, 46692, 46693, 46694, 46696, 46697, 46698, 46700,
    46701, 46702, 46704, 46705, 46706, 46708, 46709, 46710,
    46711, 46713, 46714, 46715, 46717, 46718, 46719, 46721,
    46722, 46723, 46725, 46726, 46727, 46729, 46730, 46731,
    46733, 46734, 46735, 46737, 46738, 46739, 46741, 46742,
    46743, 46745, 46746, 46747, 46749, 46750, 46751, 46752,
    46754, 46755, 46756, 46758, 46759, 46760, 46762, 46763,
    46764, 46766, 46767, 46768, 46770, 46771, 46772, 46774,
    46775, 46776, 46778, 46779, 46780, 46782, 46783, 46784,
    46786, 46787, 46788, 46790, 46791, 46792, 46793, 46795,
    46796, 46797, 46799, 46800, 46801, 46803, 46804, 46805,
    46807, 46808, 46809, 46811, 46812, 46813, 46815, 46816,
    46817, 46819, 46820, 46821, 46823, 46824, 46825, 46827,
    46828, 46829, 46831, 46832, 46833, 46835, 46836, 46837,
    46838, 46840, 46841, 46842, 46844, 46845, 46846, 46848,
    46849, 46850, 46852, 46853, 46854, 46856, 46857, 46858,
    46860, 46861, 46862, 46864, 46865, 46866, 46868, 46869,
    46870, 46872, 46873, 46874, 46876, 46877, 46878, 46880,
    46881, 46882, 46884, 46885, 46886, 46887, 46889, 46890,
    46891, 46893, 46894, 46895, 46897, 46898, 46899, 46901,
    46902, 46903, 46905, 46906, 46907, 46909, 46910, 46911,
    46913, 46914, 46915, 46917, 46918, 46919, 46921, 46922,
    46923, 46925, 46926, 46927, 46929, 46930, 46931, 46933,
    46934, 46935, 46937, 46938, 46939, 46940, 46942, 46943,
    46944, 46946, 46947, 46948, 46950, 46951, 46952, 46954,
    46955, 46956, 46958, 46959, 46960, 46962, 46963, 46964,
    46966, 46967, 46968, 46970, 46971, 46972, 46974, 46975,
    46976, 46978, 46979, 46980, 46982, 46983, 46984, 46986,
    46987, 46988, 46990, 46991, 46992, 46994, 46995, 46996,
    46998, 46999, 47000, 47002, 47003, 47004, 47005, 47007,
    47008, 47009, 47011, 47012, 47013, 47015, 47016, 47017,
    47019, 47020, 47021, 47023, 47024, 47025, 47027, 47028,
    47029, 47031, 47032, 47033, 47035, 47036, 47037, 47039,
    47040, 47041, 47043, 47044, 47045, 47047, 47048, 47049,
    47051, 47052, 47053, 47055, 47056, 47057, 47059, 47060,
    47061, 47063, 47064, 47065, 47067, 47068, 47069, 47071,
    47072, 47073, 47075, 47076, 47077, 47079, 47080, 47081,
    47082, 47084, 47085, 47086, 47088, 47089, 47090, 47092,
    47093, 47094, 47096, 47097, 47098, 47100, 47101, 47102,
    47104, 47105, 47106, 47108, 47109, 47110, 47112, 47113,
    47114, 47116, 47117, 47118, 47120, 47121, 47122, 47124,
    47125, 47126, 47128, 47129, 47130, 47132, 47133, 47134,
    47136, 47137, 47138, 47140, 47141, 47142, 47144, 47145,
    47146, 47148, 47149, 47150, 47152, 47153, 47154, 47156,
    47157, 47158, 47160, 47161, 47162, 47164, 47165, 47166,
    47168, 47169, 47170, 47172, 47173, 47174, 47176, 47177,
    47178, 47180, 47181, 47182, 47184, 47185, 47186, 47188,
    47189, 47190, 47191, 47193, 47194, 47195, 47197, 47198,
    47199, 47201, 47202, 47203, 47205, 47206, 47207, 47209,
    47210, 47211, 47213, 47214, 47215, 47217, 47218, 47219,
    47221, 47222, 47223, 47225, 47226, 47227, 47229, 47230,
    47231, 47233, 47234, 47235, 47237, 47238, 47239, 47241,
    47242, 47243, 47245, 47246, 47247, 47249, 47250, 47251,
    47253, 47254, 47255, 47257, 47258, 47259, 47261, 47262,
    47263, 47265, 47266, 47267, 47269, 47270, 47271, 47273,
    47274, 47275, 47277, 47278, 47279, 47281, 47282, 47283,
    47285, 47286, 47287, 47289, 47290, 47291, 47293, 47294,
    47295, 47297, 47298, 47299, 47301, 47302, 47303, 47305,
    47306, 47307, 47309, 47310, 47311, 47313, 47314, 47315,
    47317, 47318, 47319, 47321, 47322, 47323, 47325, 47326,
    47327, 47329, 47330, 47331, 47333, 47334, 47335, 47337,
    47338, 47339, 47341, 47342, 47343, 47345, 47346, 47347,
    47349, 47350, 47351, 47353, 47354, 47355, 47357, 47358,
    47359, 47361, 47362, 47363, 47365, 47366, 47367, 47369,
    47370, 47371, 47373, 47374, 47375, 47377, 47378, 47379,
    47381, 47382, 47383, 47385, 47386, 47387, 47389, 47390,
    47391, 47393, 47394, 47395, 47397, 47398, 47399, 47401,
    47402, 47403, 47405, 47406, 47407, 47409, 47410, 47411,
    47413, 47414, 47415, 47417, 47418, 47419, 47421, 47422,
    47423, 47425, 47426, 47427, 47429, 47430, 47431, 47433,
    47434, 47435, 47437, 47438, 47439, 47441, 47442, 47443,
    47445, 47446, 47447, 47449, 47450, 47451, 47453, 47454,
    47455, 47457, 47458, 47459, 47461, 47462, 47463, 47465,
    47466, 47467, 47469, 47470, 47471, 47473, 47474, 47475,
    47477, 47478, 47479, 47481, 47482, 47483, 47485, 47486,
    47487, 47489, 47490, 47491, 47493, 47494, 47495, 47497,
    47498, 47499, 47501, 47502, 47503, 47505, 47506, 47507,
    47509, 47510, 47511, 47513, 47514, 47515, 47517, 47518,
    47519, 47521, 47522, 47523, 47525, 47526, 47527, 47529,
    47530, 47531, 47533, 47534, 47535, 47537, 47538, 47539,
    47541, 47542, 47544, 47545, 47546, 47548, 47549, 47550,
    47552, 47553, 47554, 47556, 47557, 47558, 47560, 47561,
    47562, 47564, 47565, 47566, 47568, 47569, 47570, 47572,
    47573, 47574, 47576, 47577, 47578, 47580, 47581, 47582,
    47584, 47585, 47586, 47588, 47589, 47590, 47592, 47593,
    47594, 47596, 47597, 47598, 47600, 47601, 47602, 47604,
    47605, 47606, 47608, 47609, 47610, 47612, 47613, 47614,
    47616, 47617, 47618, 47620, 47621, 47622, 47624, 47625,
    47626, 47628, 47629, 47630, 47632, 47633, 47634, 47636,
    47637, 47638, 47640, 47641, 47642, 47644, 47645, 47646,
    47648, 47649, 47651, 47652, 47653, 47655, 47656, 47657,
    47659, 47660, 47661, 47663, 47664, 47665, 47667, 47668,
    47669, 47671, 47672, 47673, 47675, 47676, 47677, 47679,
    47680, 47681, 47683, 47684, 47685, 47687, 47688, 47689,
    47691, 47692, 47693, 47695, 47696, 47697, 47699, 47700,
    47701, 47703, 47704, 47705, 47707, 47708, 47709, 47711,
    47712, 47713, 47715, 47716, 47717, 47719, 47720, 47721,
    47723, 47724, 47726, 47727, 47728, 47730, 47731, 47732,
    47734, 47735, 47736, 47738, 47739, 47740, 47742, 47743,
    47744, 47746, 47747, 47748, 47750, 47751, 47752, 47754,
    47755, 47756, 47758, 47759, 47760, 47762, 47763, 47764,
    47766, 47767, 47768, 47770, 47771, 47772, 47774, 47775,
    47776, 47778, 47779, 47780, 47782, 47783, 47784, 47786,
    47787, 47789, 47790, 47791, 47793, 47794, 47795, 47797,
    47798, 47799, 47801, 47802, 47803, 47805, 47806, 47807,
    47809, 47810, 47811, 47813, 47814, 47815, 47817, 47818,
    47819, 47821, 47822, 47823, 47825, 47826, 47827, 47829,
    47830, 47831, 47833, 47834, 47835, 47837, 47838, 47839,
    47841, 47842, 47844, 47845, 47846, 47848, 47849, 47850,
    47852, 47853, 47854, 47856, 47857, 47858, 47860, 47861,
    47862, 47864, 47865, 47866, 47868, 47869, 47870, 47872,
    47873, 47874, 47876, 47877, 47878, 47880, 47881, 47882,
    47884, 47885, 47886, 47888, 47889, 47890, 47892, 47893,
    47895, 47896, 47897, 47899, 47900, 47901, 47903, 47904,
    47905, 47907, 47908, 47909, 47911, 47912, 47913, 47915,
    47916, 47917, 47919, 47920, 47921, 47923, 47924, 47925,
    47927, 47928, 47929, 47931, 47932, 47933, 47935, 47936,
    47938, 47939, 47940, 47942, 47943, 47944, 47946, 47947,
    47948, 47950, 47951, 47952, 47954, 47955, 47956, 47958,
    47959, 47960, 47962, 47963, 47964, 47966, 47967, 47968,
    47970, 47971, 47972, 47974, 47975, 47976, 47978, 47979,
    47981, 47982, 47983, 47985, 47986, 47987, 47989, 47990,
    47991, 47993, 47994, 47995, 47997, 47998, 47999, 48001,
    48002, 48003, 48005, 48006, 48007, 48009, 48010, 48011,
    48013, 48014, 48015, 48017, 48018, 48020, 48021, 48022,
    48024, 48025, 48026, 48028, 48029, 48030, 48032, 48033,
    48034, 48036, 48037, 48038, 48040, 48041, 48042, 48044,
    48045, 48046, 48048, 48049, 48050, 48052, 48053, 48055,
    48056, 48057, 48059, 48060, 48061, 48063, 48064, 48065,
    48067, 48068, 48069, 48071, 48072, 48073, 48075, 48076,
    48077, 48079, 48080, 48081, 48083, 48084, 48085, 48087,
    48088, 48090, 48091, 48092, 48094, 48095, 48096, 48098,
    48099, 48100, 48102, 48103, 48104, 48106, 48107, 48108,
    48110, 48111, 48112, 48114, 48115, 48116, 48118, 48119,
    48120, 48122, 48123, 48125, 48126, 48127, 48129, 48130,
    48131, 48133, 48134, 48135, 48137, 48138, 48139, 48141,
    48142, 48143, 48145, 48146, 48147, 48149, 48150, 48151,
    48153, 48154, 48156, 48157, 48158, 48160, 48161, 48162,
    48164, 48165, 48166, 48168, 48169, 48170, 48172, 48173,
    48174, 48176, 48177, 48178, 48180, 48181, 48182, 48184,
    48185, 48187, 48188, 48189, 48191, 48192, 48193, 48195,
    48196, 48197, 48199, 48200, 48201, 48203, 48204, 48205,
    48207, 48208, 48209, 48211, 48212, 48213, 48215, 48216,
    48218, 48219, 48220, 48222, 48223, 48224, 48226, 48227,
    48228, 48230, 48231, 48232, 48234, 48235, 48236, 48238,
    48239, 48240, 48242, 48243, 48245, 48246, 48247, 48249,
    48250, 48251, 48253, 48254, 48255, 48257, 48258, 48259,
    48261, 48262, 48263, 48265, 48266, 48267, 48269, 48270,
    48272, 48273, 48274, 48276, 48277, 48278, 48280, 48281,
    48282, 48284, 48285, 48286, 48288, 48289, 48290, 48292,
    48293, 48294, 48296, 48297, 48299, 48300, 48301, 48303,
    48304, 48305, 48307, 48308, 48309, 48311, 48312, 48313,
    48315, 48316, 48317, 48319, 48320, 48321, 48323, 48324,
    48326, 48327, 48328, 48330, 48331, 48332, 48334, 48335,
    48336, 48338, 48339, 48340, 48342, 48343, 48344, 48346,
    48347, 48349, 48350, 48351, 48353, 48354, 48355, 48357,
    48358, 48359, 48361, 48362, 48363, 48365, 48366, 48367,
    48369, 48370, 48371, 48373, 48374, 48376, 48377, 48378,
    48380, 48381, 48382, 48384, 48385, 48386, 48388, 48389,
    48390, 48392, 48393, 48394, 48396, 48397, 48399, 48400,
    48401, 48403, 48404, 48405, 48407, 48408, 48409, 48411,
    48412, 48413, 48415, 48416, 48417, 48419, 48420, 48422,
    48423, 48424, 48426, 48427, 48428, 48430, 48431, 48432,
    48434, 48435, 48436, 48438, 48439, 48440, 48442, 48443,
    48445, 48446, 48447, 48449, 48450, 48451, 48453, 48454,
    48455, 48457, 48458, 48459, 48461, 48462, 48463, 48465,
    48466, 48468, 48469, 48470, 48472, 48473, 48474, 48476,
    48477, 48478, 48480, 48481, 48482, 48484, 48485, 48486,
    48488, 48489, 48491, 48492, 48493, 48495, 48496, 48497,
    48499, 48500, 48501, 48503, 48504, 48505, 48507, 48508,
    48510, 48511, 48512, 48514, 48515, 48516, 48518, 48519,
    48520, 48522, 48523, 48524, 48526, 48527, 48528, 48530,
    48531, 48533, 48534, 48535, 48537, 48538, 48539, 48541,
    48542, 48543, 48545, 48546, 48547, 48549, 48550, 48552,
    48553, 48554, 48556, 48557, 48558, 48560, 48561, 48562,
    48564, 48565, 48566, 48568, 48569, 48570, 48572, 48573,
    48575, 48576, 48577, 48579, 48580, 48581, 48583, 48584,
    48585, 48587, 48588, 48589, 48591, 48592, 48594, 48595,
    48596, 48598, 48599, 48600, 48602, 48603, 48604, 48606,
    48607, 48608, 48610, 48611, 48613, 48614, 48615, 48617,
    48618, 48619, 48621, 48622, 48623, 48625, 48626, 48627,
    48629, 48630, 48632, 48633, 48634, 48636, 48637, 48638,
    48640, 48641, 48642, 48644, 48645, 48646, 48648, 48649,
    48651, 48652, 48653, 48655, 48656, 48657, 48659, 48660,
    48661, 48663, 48664, 48665, 48667, 48668, 48670, 48671,
    48672, 48674, 48675, 48676, 48678, 48679, 48680, 48682,
    48683, 48684, 48686, 48687, 48689, 48690, 48691, 48693,
    48694, 48695, 48697, 48698, 48699, 48701, 48702, 48703,
    48705, 48706, 48708, 48709, 48710, 48712, 48713, 48714,
    48716, 48717, 48718, 48720, 48721, 48722, 48724, 48725,
    48727, 48728, 48729, 48731, 48732, 48733, 48735, 48736,
    48737, 48739, 48740, 48741, 48743, 48744, 48746, 48747,
    48748, 48750, 48751, 48752, 48754, 48755, 48756, 48758,
    48759, 48761, 48762, 48763, 48765, 48766, 48767, 48769,
    48770, 48771, 48773, 48774, 48775, 48777, 48778, 48780,
    48781, 48782, 48784, 48785, 48786, 48788, 48789, 48790,
    48792, 48793, 48794, 48796, 48797, 48799, 48800, 48801,
    48803, 48804, 48805, 48807, 48808, 48809, 48811, 48812,
    48814, 48815, 48816, 48818, 48819, 48820, 48822, 48823,
    48824, 48826, 48827, 48828, 48830, 48831, 48833, 48834,
    48835, 48837, 48838, 48839, 48841, 48842, 48843, 48845,
    48846, 48848, 48849, 48850, 48852, 48853, 48854, 48856,
    48857, 48858, 48860, 48861, 48863, 48864, 48865, 48867,
    48868, 48869, 48871, 48872, 48873, 48875, 48876, 48877,
    48879, 48880, 48882, 48883, 48884, 48886, 48887, 48888,
    48890, 48891, 48892, 48894, 48895, 48897, 48898, 48899,
    48901, 48902, 48903, 48905, 48906, 48907, 48909, 48910,
    48912, 48913, 48914, 48916, 48917, 48918, 48920, 48921,
    48922, 48924, 48925, 48927, 48928, 48929, 48931, 48932,
    48933, 48935, 48936, 48937, 48939, 48940, 48942, 48943,
    48944, 48946, 48947, 48948, 48950, 48951, 48952, 48954,
    48955, 48956, 48958, 48959, 48961, 48962, 48963, 48965,
    48966, 48967, 48969, 48970, 48971, 48973, 48974, 48976,
    48977, 48978, 48980, 48981, 48982, 48984, 48985, 48986,
    48988, 48989, 48991, 48992, 48993, 48995, 48996, 48997,
    48999, 49000, 49001, 49003, 49004, 49006, 49007, 49008,
    49010, 49011, 49012, 49014, 49015, 49016, 49018, 49019,
    49021, 49022, 49023, 49025, 49026, 49027, 49029, 49030,
    49031, 49033, 49034, 49036, 49037, 49038, 49040, 49041,
    49042, 49044, 49045, 49047, 49048, 49049, 49051, 49052,
    49053, 49055, 49056, 49057, 49059, 49060, 49062, 49063,
    49064, 49066, 49067, 49068, 49070, 49071, 49072, 49074,
    49075, 49077, 49078, 49079, 49081, 49082, 49083, 49085,
    49086, 49087, 49089, 49090, 49092, 49093, 49094, 49096,
    49097, 49098, 49100, 49101, 49102, 49104, 49105, 49107,
    49108, 49109, 49111, 49112, 49113, 49115, 49116, 49118,
    49119, 49120, 49122, 49123, 49124, 49126, 49127, 49128,
    49130, 49131, 49133, 49134, 49135, 49137, 49138, 49139,
    49141, 49142, 49143, 49145, 49146, 49148, 49149, 49150,
    49152, 49153, 49154, 49156, 49157, 49159, 49160, 49161,
    49163, 49164, 49165, 49167, 49168, 49169, 49171, 49172,
    49174, 49175, 49176, 49178, 49179, 49180, 49182, 49183,
    49184, 49186, 49187, 49189, 49190, 49191, 49193, 49194,
    49195, 49197, 49198, 49200, 49201, 49202, 49204, 49205,
    49206, 49208, 49209, 49210, 49212, 49213, 49215, 49216,
    49217, 49219, 49220, 49221, 49223, 49224, 49226, 49227,
    49228, 49230, 49231, 49232, 49234, 49235, 49236, 49238,
    49239, 49241, 49242, 49243, 49245, 49246, 49247, 49249,
    49250, 49252, 49253, 49254, 49256, 49257, 49258, 49260,
    49261, 49262, 49264, 49265, 49267, 49268, 49269, 49271,
    49272, 49273, 49275, 49276, 49278, 49279, 49280, 49282,
    49283, 49284, 49286, 49287, 49288, 49290, 49291, 49293,
    49294, 49295, 49297, 49298, 49299, 49301, 49302, 49304,
    49305, 49306, 49308, 49309, 49310, 49312, 49313, 49314,
    49316, 49317, 49319, 49320, 49321, 49323, 49324, 49325,
    49327, 49328, 49330, 49331, 49332, 49334, 49335, 49336,
    49338, 49339, 49341, 49342, 49343, 49345, 49346, 49347,
    49349, 49350, 49351, 49353, 49354, 49356, 49357, 49358,
    49360, 49361, 49362, 49364, 49365, 49367, 49368, 49369,
    49371, 49372, 49373, 49375, 49376, 49378, 49379, 49380,
    49382, 49383, 49384, 49386, 49387, 49389, 49390, 49391,
    49393, 49394, 49395, 49397, 49398, 49399, 49401, 49402,
    49404, 49405, 49406, 49408, 49409, 49410, 49412, 49413,
    49415, 49416, 49417, 49419, 49420, 49421, 49423, 49424,
    49426, 49427, 49428, 49430, 49431, 49432, 49434, 49435,
    49437, 49438, 49439, 49441, 49442, 49443, 49445, 49446,
    49447, 49449, 49450, 49452, 49453, 49454, 49456, 49457,
    49458, 49460, 49461, 49463, 49464, 49465, 49467, 49468,
    49469, 49471, 49472, 49474, 49475, 49476, 49478, 49479,
    49480, 49482, 49483, 49485, 49486, 49487, 49489, 49490,
    49491, 49493, 49494, 49496, 49497, 49498, 49500, 49501,
    49502, 49504, 49505, 49507, 49508, 49509, 49511, 49512,
    49513, 49515, 49516, 49518, 49519, 49520, 49522, 49523,
    49524, 49526, 49527, 49529, 49530, 49531, 49533, 49534,
    49535, 49537, 49538, 49540, 49541, 49542, 49544, 49545,
    49546, 49548, 49549, 49551, 49552, 49553, 49555, 49556,
    49557, 49559, 49560, 49562, 49563, 49564, 49566, 49567,
    49568, 49570, 49571, 49573, 49574, 49575, 49577, 49578,
    49579, 49581, 49582, 49584, 49585, 49586, 49588, 49589,
    49590, 49592, 49593, 49595, 49596, 49597, 49599, 49600,
    49601, 49603, 49604, 49606, 49607, 49608, 49610, 49611,
    49612, 49614, 49615, 49617, 49618, 49619, 49621, 49622,
    49623, 49625, 49626, 49628, 49629, 49630, 49632, 49633,
    49634, 49636, 49637, 49639, 49640, 49641, 49643, 49644,
    49645, 49647, 49648, 49650, 49651, 49652, 49654, 49655,
    49656, 49658, 49659, 49661, 49662, 49663, 49665, 49666,
    49667, 49669, 49670, 49672, 49673, 49674, 49676, 49677,
    49678, 49680, 49681, 49683, 49684, 49685, 49687, 49688,
    49689, 49691, 49692, 49694, 49695, 49696, 49698, 49699,
    49700, 49702, 49703, 49705, 49706, 49707, 49709, 49710,
    49712, 49713, 49714, 49716, 49717, 49718, 49720, 49721,
    49723, 49724, 49725, 49727, 49728, 49729, 49731, 49732,
    49734, 49735, 49736, 49738, 49739, 49740, 49742, 49743,
    49745, 49746, 49747, 49749, 49750, 49751, 49753, 49754,
    49756, 49757, 49758, 49760, 49761, 49763, 49764, 49765,
    49767, 49768, 49769, 49771, 49772, 49774, 49775, 49776,
    49778, 49779, 49780, 49782, 49783, 49785, 49786, 49787,
    49789, 49790, 49791, 49793, 49794, 49796, 49797, 49798,
    49800, 49801, 49803, 49804, 49805, 49807, 49808, 49809,
    49811, 49812, 49814, 49815, 49816, 49818, 49819, 49820,
    49822, 49823, 49825, 49826, 49827, 49829, 49830, 49831,
    49833, 49834, 49836, 49837, 49838, 49840, 49841, 49843,
    49844, 49845, 49847, 49848, 49849, 49851, 49852, 49854,
    49855, 49856, 49858, 49859, 49860, 49862, 49863, 49865,
    49866, 49867, 49869, 49870, 49872, 49873, 49874, 49876,
    49877, 49878, 49880, 49881, 49883, 49884, 49885, 49887,
    49888, 49889, 49891, 49892, 49894, 49895, 49896, 49898,
    49899, 49901, 49902, 49903, 49905, 49906, 49907, 49909,
    49910, 49912, 49913, 49914, 49916, 49917, 49918, 49920,
    49921, 49923, 49924, 49925, 49927, 49928, 49930, 49931,
    49932, 49934, 49935, 49936, 49938, 49939, 49941, 49942,
    49943, 49945, 49946, 49948, 49949, 49950, 49952, 49953,
    49954, 49956, 49957, 49959, 49960, 49961, 49963, 49964,
    49965, 49967, 49968, 49970, 49971, 49972, 49974, 49975,
    49977, 49978, 49979, 49981, 49982, 49983, 49985, 49986,
    49988, 49989, 49990, 49992, 49993, 49995, 49996, 49997,
    49999, 50000, 50001, 50003, 50004, 50006, 50007, 50008,
    50010, 50011, 50013, 50014, 50015, 50017, 50018, 50019,
    50021, 50022, 50024, 50025, 50026, 50028, 50029, 50031,
    50032, 50033, 50035, 50036, 50037, 50039, 50040, 50042,
    50043, 50044, 50046, 50047, 50049, 50050, 50051, 50053,
    50054, 50055, 50057, 50058, 50060, 50061, 50062, 50064,
    50065, 50067, 50068, 50069, 50071, 50072, 50073, 50075,
    50076, 50078, 50079, 50080, 50082, 50083, 50085, 50086,
    50087, 50089, 50090, 50091, 50093, 50094, 50096, 50097,
    50098, 50100, 50101, 50103, 50104, 50105, 50107, 50108,
    50109, 50111, 50112, 50114, 50115, 50116, 50118, 50119,
    50121, 50122, 50123, 50125, 50126, 50127, 50129, 50130,
    50132, 50133, 50134, 50136, 50137, 50139, 50140, 50141,
    50143, 50144, 50145, 50147, 50148, 50150, 50151, 50152,
    50154, 50155, 50157, 50158, 50159, 50161, 50162, 50164,
    50165, 50166, 50168, 50169, 50170, 50172, 50173, 50175,
    50176, 50177, 50179, 50180, 50182, 50183, 50184, 50186,
    50187, 50188, 50190, 50191, 50193, 50194, 50195, 50197,
    50198, 50200, 50201, 50202, 50204, 50205, 50207, 50208,
    50209, 50211, 50212, 50213, 50215, 50216, 50218, 50219,
    50220, 50222, 50223, 50225, 50226, 50227, 50229, 50230,
    50231, 50233, 50234, 50236, 50237, 50238, 50240, 50241,
    50243, 50244, 50245, 50247, 50248, 50250, 50251, 50252,
    50254, 50255, 50256, 50258, 50259, 50261, 50262, 50263,
    50265, 50266, 50268, 50269, 50270, 50272, 50273, 50275,
    50276, 50277, 50279, 50280, 50281, 50283, 50284, 50286,
    50287, 50288, 50290, 50291, 50293, 50294, 50295, 50297,
    50298, 50300, 50301, 50302, 50304, 50305, 50307, 50308,
    50309, 50311, 50312, 50313, 50315, 50316, 50318, 50319,
    50320, 50322, 50323, 50325, 50326, 50327, 50329, 50330,
    50332, 50333, 50334, 50336, 50337, 50338, 50340, 50341,
    50343, 50344, 50345, 50347, 50348, 50350, 50351, 50352,
    50354, 50355, 50357, 50358, 50359, 50361, 50362, 50364,
    50365, 50366, 50368, 50369, 50370, 50372, 50373, 50375,
    50376, 50377, 50379, 50380, 50382, 50383, 50384, 50386,
    50387, 50389, 50390, 50391, 50393, 50394, 50396, 50397,
    50398, 50400, 50401, 50402, 50404, 50405, 50407, 50408,
    50409, 50411, 50412, 50414, 50415, 50416, 50418, 50419,
    50421, 50422, 50423, 50425, 50426, 50428, 50429, 50430,
    50432, 50433, 50434, 50436, 50437, 50439, 50440, 50441,
    50443, 50444, 50446, 50447, 50448, 50450, 50451, 50453,
    50454, 50455, 50457, 50458, 50460, 50461, 50462, 50464,
    50465, 50467, 50468, 50469, 50471, 50472, 50473, 50475,
    50476, 50478, 50479, 50480, 50482, 50483, 50485, 50486,
    50487, 50489, 50490, 50492, 50493, 50494, 50496, 50497,
    50499, 50500, 50501, 50503, 50504, 50506, 50507, 50508,
    50510, 50511, 50512, 50514, 50515, 50517, 50518, 50519,
    50521, 50522, 50524, 50525, 50526, 50528, 50529, 50531,
    50532, 50533, 50535, 50536, 50538, 50539, 50540, 50542,
    50543, 50545, 50546, 50547, 50549, 50550, 50552, 50553,
    50554, 50556, 50557, 50559, 50560, 50561, 50563, 50564,
    50565, 50567, 50568, 50570, 50571, 50572, 50574, 50575,
    50577, 50578, 50579, 50581, 50582, 50584, 50585, 50586,
    50588, 50589, 50591, 50592, 50593, 50595, 50596, 50598,
    50599, 50600, 50602, 50603, 50605, 50606, 50607, 50609,
    50610, 50612, 50613, 50614, 50616, 50617, 50619, 50620,
    50621, 50623, 50624, 50626, 50627, 50628, 50630, 50631,
    50632, 50634, 50635, 50637, 50638, 50639, 50641, 50642,
    50644, 50645, 50646, 50648, 50649, 50651, 50652, 50653,
    50655, 50656, 50658, 50659, 50660, 50662, 50663, 50665,
    50666, 50667, 50669, 50670, 50672, 50673, 50674, 50676,
    50677, 50679, 50680, 50681, 50683, 50684, 50686, 50687,
    50688, 50690, 50691, 50693, 50694, 50695, 50697, 50698,
    50700, 50701, 50702, 50704, 50705, 50707, 50708, 50709,
    50711, 50712, 50714, 50715, 50716, 50718, 50719, 50721,
    50722, 50723, 50725, 50726, 50728, 50729, 50730, 50732,
    50733, 50735, 50736, 50737, 50739, 50740, 50741, 50743,
    50744, 50746, 50747, 50748, 50750, 50751, 50753, 50754,
    50755, 50757, 50758, 50760, 50761, 50762, 50764, 50765,
    50767, 50768, 50769, 50771, 50772, 50774, 50775, 50776,
    50778, 50779, 50781, 50782, 50783, 50785, 50786, 50788,
    50789, 50790, 50792, 50793, 50795, 50796, 50797, 50799,
    50800, 50802, 50803, 50804, 50806, 50807, 50809, 50810,
    50811, 50813, 50814, 50816, 50817, 50818, 50820, 50821,
    50823, 50824, 50825, 50827, 50828, 50830, 50831, 50832,
    50834, 50835, 50837, 50838, 50839, 50841, 50842, 50844,
    50845, 50846, 50848, 50849, 50851, 50852, 50853, 50855,
    50856, 50858, 50859, 50860, 50862, 50863, 50865, 50866,
    50868, 50869, 50870, 50872, 50873, 50875, 50876, 50877,
    50879, 50880, 50882, 50883, 50884, 50886, 50887, 50889,
    50890, 50891, 50893, 50894, 50896, 50897, 50898, 50900,
    50901, 50903, 50904, 50905, 50907, 50908, 50910, 50911,
    50912, 50914, 50915, 50917, 50918, 50919, 50921, 50922,
    50924, 50925, 50926, 50928, 50929, 50931, 50932, 50933,
    50935, 50936, 50938, 50939, 50940, 50942, 50943, 50945,
    50946, 50947, 50949, 50950, 50952, 50953, 50954, 50956,
    50957, 50959, 50960, 50961, 50963, 50964, 50966, 50967,
    50968, 50970, 50971, 50973, 50974, 50975, 50977, 50978,
    50980, 50981, 50983, 50984, 50985, 50987, 50988, 50990,
    50991, 50992, 50994, 50995, 50997, 50998, 50999, 51001,
    51002, 51004, 51005, 51006, 51008, 51009, 51011, 51012,
    51013, 51015, 51016, 51018, 51019, 51020, 51022, 51023,
    51025, 51026, 51027, 51029, 51030, 51032, 51033, 51034,
    51036, 51037, 51039, 51040, 51041, 51043, 51044, 51046,
    51047, 51049, 51050, 51051, 51053, 51054, 51056, 51057,
    51058, 51060, 51061, 51063, 51064, 51065, 51067, 51068,
    51070, 51071, 51072, 51074, 51075, 51077, 51078, 51079,
    51081, 51082, 51084, 51085, 51086, 51088, 51089, 51091,
    51092, 51094, 51095, 51096, 51098, 51099, 51101, 51102,
    51103, 51105, 51106, 51108, 51109, 51110, 51112, 51113,
    51115, 51116, 51117, 51119, 51120, 51122, 51123, 51124,
    51126, 51127, 51129, 51130, 51131, 51133, 51134, 51136,
    51137, 51139, 51140, 51141, 51143, 51144, 51146, 51147,
    51148, 51150, 51151, 51153, 51154, 51155, 51157, 51158,
    51160, 51161, 51162, 51164, 51165, 51167, 51168, 51169,
    51171, 51172, 51174, 51175, 51177, 51178, 51179, 51181,
    51182, 51184, 51185, 51186, 51188, 51189, 51191, 51192,
    51193, 51195, 51196, 51198, 51199, 51200, 51202, 51203,
    51205, 51206, 51207, 51209, 51210, 51212, 51213, 51215,
    51216, 51217, 51219, 51220, 51222, 51223, 51224, 51226,
    51227, 51229, 51230, 51231, 51233, 51234, 51236, 51237,
    51238, 51240, 51241, 51243, 51244, 51246, 51247, 51248,
    51250, 51251, 51253, 51254, 51255, 51257, 51258, 51260,
    51261, 51262, 51264, 51265, 51267, 51268, 51270, 51271,
    51272, 51274, 51275, 51277, 51278, 51279, 51281, 51282,
    51284, 51285, 51286, 51288, 51289, 51291, 51292, 51293,
    51295, 51296, 51298, 51299, 51301, 51302, 51303, 51305,
    51306, 51308, 51309, 51310, 51312, 51313, 51315, 51316,
    51317, 51319, 51320, 51322, 51323, 51325, 51326, 51327,
    51329, 51330, 51332, 51333, 51334, 51336, 51337, 51339,
    51340, 51341, 51343, 51344, 51346, 51347, 51349, 51350,
    51351, 51353, 51354, 51356, 51357, 51358, 51360, 51361,
    51363, 51364, 51365, 51367, 51368, 51370, 51371, 51373,
    51374, 51375, 51377, 51378, 51380, 51381, 51382, 51384,
    51385, 51387, 51388, 51389, 51391, 51392, 51394, 51395,
    51397, 51398, 51399, 51401, 51402, 51404, 51405, 51406,
    51408, 51409, 51411, 51412, 51413, 51415, 51416, 51418,
    51419, 51421, 51422, 51423, 51425, 51426, 51428, 51429,
    51430, 51432, 51433, 51435, 51436, 51437, 51439, 51440,
    51442, 51443, 51445, 51446, 51447, 51449, 51450, 51452,
    51453, 51454, 51456, 51457, 51459, 51460, 51462, 51463,
    51464, 51466, 51467, 51469, 51470, 51471, 51473, 51474,
    51476, 51477, 51478, 51480, 51481, 51483, 51484, 51486,
    51487, 51488, 51490, 51491, 51493, 51494, 51495, 51497,
    51498, 51500, 51501, 51503, 51504, 51505, 51507, 51508,
    51510, 51511, 51512, 51514, 51515, 51517, 51518, 51520,
    51521, 51522, 51524, 51525, 51527, 51528, 51529, 51531,
    51532, 51534, 51535, 51537, 51538, 51539, 51541, 51542,
    51544, 51545, 51546, 51548, 51549, 51551, 51552, 51554,
    51555, 51556, 51558, 51559, 51561, 51562, 51563, 51565,
    51566, 51568, 51569, 51570, 51572, 51573, 51575, 51576,
    51578, 51579, 51580, 51582, 51583, 51585, 51586, 51587,
    51589, 51590, 51592, 51593, 51595, 51596, 51597, 51599,
    51600, 51602, 51603, 51604, 51606, 51607, 51609, 51610,
    51612, 51613, 51614, 51616, 51617, 51619, 51620, 51622,
    51623, 51624, 51626, 51627, 51629, 51630, 51631, 51633,
    51634, 51636, 51637, 51639, 51640, 51641, 51643, 51644,
    51646, 51647, 51648, 51650, 51651, 51653, 51654, 51656,
    51657, 51658, 51660, 51661, 51663, 51664, 51665, 51667,
    51668, 51670, 51671, 51673, 51674, 51675, 51677, 51678,
    51680, 51681, 51682, 51684, 51685, 51687, 51688, 51690,
    51691, 51692, 51694, 51695, 51697, 51698, 51700, 51701,
    51702, 51704, 51705, 51707, 51708, 51709, 51711, 51712,
    51714, 51715, 51717, 51718, 51719, 51721, 51722, 51724,
    51725, 51726, 51728, 51729, 51731, 51732, 51734, 51735,
    51736, 51738, 51739, 51741, 51742, 51744, 51745, 51746,
    51748, 51749, 51751, 51752, 51753, 51755, 51756, 51758,
    51759, 51761, 51762, 51763, 51765, 51766, 51768, 51769,
    51771, 51772, 51773, 51775, 51776, 51778, 51779, 51780,
    51782, 51783, 51785, 51786, 51788, 51789, 51790, 51792,
    51793, 51795, 51796, 51798, 51799, 51800, 51802, 51803,
    51805, 51806, 51807, 51809, 51810, 51812, 51813, 51815,
    51816, 51817, 51819, 51820, 51822, 51823, 51825, 51826,
    51827, 51829, 51830, 51832, 51833, 51834, 51836, 51837,
    51839, 51840, 51842, 51843, 51844, 51846, 51847, 51849,
    51850, 51852, 51853, 51854, 51856, 51857, 51859, 51860,
    51861, 51863, 51864, 51866, 51867, 51869, 51870, 51871,
    51873, 51874, 51876, 51877, 51879, 51880, 51881, 51883,
    51884, 51886, 51887, 51889, 51890, 51891, 51893, 51894,
    51896, 51897, 51898, 51900, 51901, 51903, 51904, 51906,
    51907, 51908, 51910, 51911, 51913, 51914, 51916, 51917,
    51918, 51920, 51921, 51923, 51924, 51926, 51927, 51928,
    51930, 51931, 51933, 51934, 51936, 51937, 51938, 51940,
    51941, 51943, 51944, 51945, 51947, 51948, 51950, 51951,
    51953, 51954, 51955, 51957, 51958, 51960, 51961, 51963,
    51964, 51965, 51967, 51968, 51970, 51971, 51973, 51974,
    51975, 51977, 51978, 51980, 51981, 51983, 51984, 51985,
    51987, 51988, 51990, 51991, 51993, 51994, 51995, 51997,
    51998, 52000, 52001, 52002, 52004, 52005, 52007, 52008,
    52010, 52011, 52012, 52014, 52015, 52017, 52018, 52020,
    52021, 52022, 52024, 52025, 52027, 52028, 52030, 52031,
    52032, 52034, 52035, 52037, 52038, 52040, 52041, 52042,
    52044, 52045, 52047, 52048, 52050, 52051, 52052, 52054,
    52055, 52057, 52058, 52060, 52061, 52062, 52064, 52065,
    52067, 52068, 52070, 52071, 52072, 52074, 52075, 52077,
    52078, 52080, 52081, 52082, 52084, 52085, 52087, 52088,
    52090, 52091, 52092, 52094, 52095, 52097, 52098, 52100,
    52101, 52102, 52104, 52105, 52107, 52108, 52110, 52111,
    52112, 52114, 52115, 52117, 52118, 52120, 52121, 52122,
    52124, 52125, 52127, 52128, 52130, 52131, 52132, 52134,
    52135, 52137, 52138, 52140, 52141, 52142, 52144, 52145,
    52147, 52148, 52150, 52151, 52152, 52154, 52155, 52157,
    52158, 52160, 52161, 52162, 52164, 52165, 52167, 52168,
    52170, 52171, 52172, 52174, 52175, 52177, 52178, 52180,
    52181, 52182, 52184, 52185, 52187, 52188, 52190, 52191,
    52192, 52194, 52195, 52197, 52198, 52200, 52201, 52202,
    52204, 52205, 52207, 52208, 52210, 52211, 52212, 52214,
    52215, 52217, 52218, 52220, 52221, 52222, 52224, 52225,
    52227, 52228, 52230, 52231, 52232, 52234, 52235, 52237,
    52238, 52240, 52241, 52242, 52244, 52245, 52247, 52248,
    52250, 52251, 52253, 52254, 52255, 52257, 52258, 52260,
    52261, 52263, 52264, 52265, 52267, 52268, 52270, 52271,
    52273, 52274, 52275, 52277, 52278, 52280, 52281, 52283,
    52284, 52285, 52287, 52288, 52290, 52291, 52293, 52294,
    52295, 52297, 52298, 52300, 52301, 52303, 52304, 52305,
    52307, 52308, 52310, 52311, 52313, 52314, 52316, 52317,
    52318, 52320, 52321, 52323, 52324, 52326, 52327, 52328,
    52330, 52331, 52333, 52334, 52336, 52337, 52338, 52340,
    52341, 52343, 52344, 52346, 52347, 52348, 52350, 52351,
    52353, 52354, 52356, 52357, 52359, 52360, 52361, 52363,
    52364, 52366, 52367, 52369, 52370, 52371, 52373, 52374,
    52376, 52377, 52379, 52380, 52381, 52383, 52384, 52386,
    52387, 52389, 52390, 52391, 52393, 52394, 52396, 52397,
    52399, 52400, 52402, 52403, 52404, 52406, 52407, 52409,
    52410, 52412, 52413, 52414, 52416, 52417, 52419, 52420,
    52422, 52423, 52424, 52426, 52427, 52429, 52430, 52432,
    52433, 52435, 52436, 52437, 52439, 52440, 52442, 52443,
    52445, 52446, 52447, 52449, 52450, 52452, 52453, 52455,
    52456, 52458, 52459, 52460, 52462, 52463, 52465, 52466,
    52468, 52469, 52470, 52472, 52473, 52475, 52476, 52478,
    52479, 52480, 52482, 52483, 52485, 52486, 52488, 52489,
    52491, 52492, 52493, 52495, 52496, 52498, 52499, 52501,
    52502, 52503, 52505, 52506, 52508, 52509, 52511, 52512,
    52514, 52515, 52516, 52518, 52519, 52521, 52522, 52524,
    52525, 52526, 52528, 52529, 52531, 52532, 52534, 52535,
    52537, 52538, 52539, 52541, 52542, 52544, 52545, 52547,
    52548, 52549, 52551, 52552, 52554, 52555, 52557, 52558,
    52560, 52561, 52562, 52564, 52565, 52567, 52568, 52570,
    52571, 52573, 52574, 52575, 52577, 52578, 52580, 52581,
    52583, 52584, 52585, 52587, 52588, 52590, 52591, 52593,
    52594, 52596, 52597, 52598, 52600, 52601, 52603, 52604,
    52606, 52607, 52608, 52610, 52611, 52613, 52614, 52616,
    52617, 52619, 52620, 52621, 52623, 52624, 52626, 52627,
    52629, 52630, 52632, 52633, 52634, 52636, 52637, 52639,
    52640, 52642, 52643, 52644, 52646, 52647, 52649, 52650,
    52652, 52653, 52655, 52656, 52657, 52659, 52660, 52662,
    52663, 52665, 52666, 52668, 52669, 52670, 52672, 52673,
    52675, 52676, 52678, 52679, 52680, 52682, 52683, 52685,
    52686, 52688, 52689, 52691, 52692, 52693, 52695, 52696,
    52698, 52699, 52701, 52702, 52704, 52705, 52706, 52708,
    52709, 52711, 52712, 52714, 52715, 52717, 52718, 52719,
    52721, 52722, 52724, 52725, 52727, 52728, 52730, 52731,
    52732, 52734, 52735, 52737, 52738, 52740, 52741, 52742,
    52744, 52745, 52747, 52748, 52750, 52751, 52753, 52754,
    52755, 52757, 52758, 52760, 52761, 52763, 52764, 52766,
    52767, 52768, 52770, 52771, 52773, 52774, 52776, 52777,
    52779, 52780, 52781, 52783, 52784, 52786, 52787, 52789,
    52790, 52792, 52793, 52794, 52796, 52797, 52799, 52800,
    52802, 52803, 52805, 52806, 52807, 52809, 52810, 52812,
    52813, 52815, 52816, 52818, 52819, 52820, 52822, 52823,
    52825, 52826, 52828, 52829, 52831, 52832, 52833, 52835,
    52836, 52838, 52839, 52841, 52842, 52844, 52845, 52846,
    52848, 52849, 52851, 52852, 52854, 52855, 52857, 52858,
    52859, 52861, 52862, 52864, 52865, 52867, 52868, 52870,
    52871, 52872, 52874, 52875, 52877, 52878, 52880, 52881,
    52883, 52884, 52885, 52887, 52888, 52890, 52891, 52893,
    52894, 52896, 52897, 52898, 52900, 52901, 52903, 52904,
    52906, 52907, 52909, 52910, 52911, 52913, 52914, 52916,
    52917, 52919, 52920, 52922, 52923, 52924, 52926, 52927,
    52929, 52930, 52932, 52933, 52935, 52936, 52938, 52939,
    52940, 52942, 52943, 52945, 52946, 52948, 52949, 52951,
    52952, 52953, 52955, 52956, 52958, 52959, 52961, 52962,
    52964, 52965, 52966, 52968, 52969, 52971, 52972, 52974,
    52975, 52977, 52978, 52979, 52981, 52982, 52984, 52985,
    52987, 52988, 52990, 52991, 52993, 52994, 52995, 52997,
    52998, 53000, 53001, 53003, 53004, 53006, 53007, 53008,
    53010, 53011, 53013, 53014, 53016, 53017, 53019, 53020,
    53021, 53023, 53024, 53026, 53027, 53029, 53030, 53032,
    53033, 53035, 53036, 53037, 53039, 53040, 53042, 53043,
    53045, 53046, 53048, 53049, 53050, 53052, 53053, 53055,
    53056, 53058, 53059, 53061, 53062, 53064, 53065, 53066,
    53068, 53069, 53071, 53072, 53074, 53075, 53077, 53078,
    53079, 53081, 53082, 53084, 53085, 53087, 53088, 53090,
    53091, 53093, 53094, 53095, 53097, 53098, 53100, 53101,
    53103, 53104, 53106, 53107, 53108, 53110, 53111, 53113,
    53114, 53116, 53117, 53119, 53120, 53122, 53123, 53124,
    53126, 53127, 53129, 53130, 53132, 53133, 53135, 53136,
    53138, 53139, 53140, 53142, 53143, 53145, 53146, 53148,
    53149, 53151, 53152, 53153, 53155, 53156, 53158, 53159,
    53161, 53162, 53164, 53165, 53167, 53168, 53169, 53171,
    53172, 53174, 53175, 53177, 53178, 53180, 53181, 53183,
    53184, 53185, 53187, 53188, 53190, 53191, 53193, 53194,
    53196, 53197, 53199, 53200, 53201, 53203, 53204, 53206,
    53207, 53209, 53210, 53212, 53213, 53214, 53216, 53217,
    53219, 53220, 53222, 53223, 53225, 53226, 53228, 53229,
    53230, 53232, 53233, 53235, 53236, 53238, 53239, 53241,
    53242, 53244, 53245, 53246, 53248, 53249, 53251, 53252,
    53254, 53255, 53257, 53258, 53260, 53261, 53262, 53264,
    53265, 53267, 53268, 53270, 53271, 53273, 53274, 53276,
    53277, 53278, 53280, 53281, 53283, 53284, 53286, 53287,
    53289, 53290, 53292, 53293, 53294, 53296, 53297, 53299,
    53300, 53302, 53303, 53305, 53306, 53308, 53309, 53310,
    53312, 53313, 53315, 53316, 53318, 53319, 53321, 53322,
    53324, 53325, 53327, 53328, 53329, 53331, 53332, 53334,
    53335, 53337, 53338, 53340, 53341, 53343, 53344, 53345,
    53347, 53348, 53350, 53351, 53353, 53354, 53356, 53357,
    53359, 53360, 53361, 53363, 53364, 53366, 53367, 53369,
    53370, 53372, 53373, 53375, 53376, 53377, 53379, 53380,
    53382, 53383, 53385, 53386, 53388, 53389, 53391, 53392,
    53394, 53395, 53396, 53398, 53399, 53401, 53402, 53404,
    53405, 53407, 53408, 53410, 53411, 53412, 53414, 53415,
    53417, 53418, 53420, 53421, 53423, 53424, 53426, 53427,
    53429, 53430, 53431, 53433, 53434, 53436, 53437, 53439,
    53440, 53442, 53443, 53445, 53446, 53447, 53449, 53450,
    53452, 53453, 53455, 53456, 53458, 53459, 53461, 53462,
    53464, 53465, 53466, 53468, 53469, 53471, 53472, 53474,
    53475, 53477, 53478, 53480, 53481, 53482, 53484, 53485,
    53487, 53488, 53490, 53491, 53493, 53494, 53496, 53497,
    53499, 53500, 53501, 53503, 53504, 53506, 53507, 53509,
    53510, 53512, 53513, 53515, 53516, 53518, 53519, 53520,
    53522, 53523, 53525, 53526, 53528, 53529, 53531, 53532,
    53534, 53535, 53537, 53538, 53539, 53541, 53542, 53544,
    53545, 53547, 53548, 53550, 53551, 53553, 53554, 53556,
    53557, 53558, 53560, 53561, 53563, 53564, 53566, 53567,
    53569, 53570, 53572, 53573, 53575, 53576, 53577, 53579,
    53580, 53582, 53583, 53585, 53586, 53588, 53589, 53591,
    53592, 53594, 53595, 53596, 53598, 53599, 53601, 53602,
    53604, 53605, 53607, 53608, 53610, 53611, 53613, 53614,
    53615, 53617, 53618, 53620, 53621, 53623, 53624, 53626,
    53627, 53629, 53630, 53632, 53633, 53634, 53636, 53637,
    53639, 53640, 53642, 53643, 53645, 53646, 53648, 53649,
    53651, 53652, 53654, 53655, 53656, 53658, 53659, 53661,
    53662, 53664, 53665, 53667, 53668, 53670, 53671, 53673,
    53674, 53675, 53677, 53678, 53680, 53681, 53683, 53684,
    53686, 53687, 53689, 53690, 53692, 53693, 53695, 53696,
    53697, 53699, 53700, 53702, 53703, 53705, 53706, 53708,
    53709, 53711, 53712, 53714, 53715, 53716, 53718, 53719,
    53721, 53722, 53724, 53725, 53727, 53728, 53730, 53731,
    53733, 53734, 53736, 53737, 53738, 53740, 53741, 53743,
    53744, 53746, 53747, 53749, 53750, 53752, 53753, 53755,
    53756, 53758, 53759, 53760, 53762, 53763, 53765, 53766,
    53768, 53769, 53771, 53772, 53774, 53775, 53777, 53778,
    53780, 53781, 53782, 53784, 53785, 53787, 53788, 53790,
    53791, 53793, 53794, 53796, 53797, 53799, 53800, 53802,
    53803, 53804, 53806, 53807, 53809, 53810, 53812, 53813,
    53815, 53816, 53818, 53819, 53821, 53822, 53824, 53825,
    53826, 53828, 53829, 53831, 53832, 53834, 53835, 53837,
    53838, 53840, 53841, 53843, 53844, 53846, 53847, 53849,
    53850, 53851, 53853, 53854, 53856, 53857, 53859, 53860,
    53862, 53863, 53865, 53866, 53868, 53869, 53871, 53872,
    53873, 53875, 53876, 53878, 53879, 53881, 53882, 53884,
    53885, 53887, 53888, 53890, 53891, 53893, 53894, 53896,
    53897, 53898, 53900, 53901, 53903, 53904, 53906, 53907,
    53909, 53910, 53912, 53913, 53915, 53916, 53918, 53919,
    53921, 53922, 53923, 53925, 53926, 53928, 53929, 53931,
    53932, 53934, 53935, 53937, 53938, 53940, 53941, 53943,
    53944, 53945, 53947, 53948, 53950, 53951, 53953, 53954,
    53956, 53957, 53959, 53960, 53962, 53963, 53965, 53966,
    53968, 53969, 53971, 53972, 53973, 53975, 53976, 53978,
    53979, 53981, 53982, 53984, 53985, 53987, 53988, 53990,
    53991, 53993, 53994, 53996, 53997, 53998, 54000, 54001,
    54003, 54004, 54006, 54007, 54009, 54010, 54012, 54013,
    54015, 54016, 54018, 54019, 54021, 54022, 54024, 54025,
    54026, 54028, 54029, 54031, 54032, 54034, 54035, 54037,
    54038, 54040, 54041, 54043, 54044, 54046, 54047, 54049,
    54050, 54051, 54053, 54054, 54056, 54057, 54059, 54060,
    54062, 54063, 54065, 54066, 54068, 54069, 54071, 54072,
    54074, 54075, 54077, 54078, 54079, 54081, 54082, 54084,
    54085, 54087, 54088, 54090, 54091, 54093, 54094, 54096,
    54097, 54099, 54100, 54102, 54103, 54105, 54106, 54108,
    54109, 54110, 54112, 54113, 54115, 54116, 54118, 54119,
    54121, 54122, 54124, 54125, 54127, 54128, 54130, 54131,
    54133, 54134, 54136, 54137, 54138, 54140, 54141, 54143,
    54144, 54146, 54147, 54149, 54150, 54152, 54153, 54155,
    54156, 54158, 54159, 54161, 54162, 54164, 54165, 54167,
    54168, 54169, 54171, 54172, 54174, 54175, 54177, 54178,
    54180, 54181, 54183, 54184, 54186, 54187, 54189, 54190,
    54192, 54193, 54195, 54196, 54198, 54199, 54200, 54202,
    54203, 54205, 54206, 54208, 54209, 54211, 54212, 54214,
    54215, 54217, 54218, 54220, 54221, 54223, 54224, 54226,
    54227, 54229, 54230, 54232, 54233, 54234, 54236, 54237,
    54239, 54240, 54242, 54243, 54245, 54246, 54248, 54249,
    54251, 54252, 54254, 54255, 54257, 54258, 54260, 54261,
    54263, 54264, 54266, 54267, 54268, 54270, 54271, 54273,
    54274, 54276, 54277, 54279, 54280, 54282, 54283, 54285,
    54286, 54288, 54289, 54291, 54292, 54294, 54295, 54297,
    54298, 54300, 54301, 54302, 54304, 54305, 54307, 54308,
    54310, 54311, 54313, 54314, 54316, 54317, 54319, 54320,
    54322, 54323, 54325, 54326, 54328, 54329, 54331, 54332,
    54334, 54335, 54337, 54338, 54339, 54341, 54342, 54344,
    54345, 54347, 54348, 54350, 54351, 54353, 54354, 54356,
    54357, 54359, 54360, 54362, 54363, 54365, 54366, 54368,
    54369, 54371, 54372, 54374, 54375, 54376, 54378, 54379,
    54381, 54382, 54384, 54385, 54387, 54388, 54390, 54391,
    54393, 54394, 54396, 54397, 54399, 54400, 54402, 54403,
    54405, 54406, 54408, 54409, 54411, 54412, 54414, 54415,
    54417, 54418, 54419, 54421, 54422, 54424, 54425, 54427,
    54428, 54430, 54431, 54433, 54434, 54436, 54437, 54439,
    54440, 54442, 54443, 54445, 54446, 54448, 54449, 54451,
    54452, 54454, 54455, 54457, 54458, 54460, 54461, 54462,
    54464, 54465, 54467, 54468, 54470, 54471, 54473, 54474,
    54476, 54477, 54479, 54480, 54482, 54483, 54485, 54486,
    54488, 54489, 54491, 54492, 54494, 54495, 54497, 54498,
    54500, 54501, 54503, 54504, 54506, 54507, 54508, 54510,
    54511, 54513, 54514, 54516, 54517, 54519, 54520, 54522,
    54523, 54525, 54526, 54528, 54529, 54531, 54532, 54534,
    54535, 54537, 54538, 54540, 54541, 54543, 54544, 54546,
    54547, 54549, 54550, 54552, 54553, 54555, 54556, 54557,
    54559, 54560, 54562, 54563, 54565, 54566, 54568, 54569,
    54571, 54572, 54574, 54575, 54577, 54578, 54580, 54581,
    54583, 54584, 54586, 54587, 54589, 54590, 54592, 54593,
    54595, 54596, 54598, 54599, 54601, 54602, 54604, 54605,
    54607, 54608, 54610, 54611, 54612, 54614, 54615, 54617,
    54618, 54620, 54621, 54623, 54624, 54626, 54627, 54629,
    54630, 54632, 54633, 54635, 54636, 54638, 54639, 54641,
    54642, 54644, 54645, 54647, 54648, 54650, 54651, 54653,
    54654, 54656, 54657, 54659, 54660, 54662, 54663, 54665,
    54666, 54668, 54669, 54671, 54672, 54673, 54675, 54676,
    54678, 54679, 54681, 54682, 54684, 54685, 54687, 54688,
    54690, 54691, 54693, 54694, 54696, 54697, 54699, 54700,
    54702, 54703, 54705, 54706, 54708, 54709, 54711, 54712,
    54714, 54715, 54717, 54718, 54720, 54721, 54723, 54724,
    54726, 54727, 54729, 54730, 54732, 54733, 54735, 54736,
    54738, 54739, 54741, 54742, 54744, 54745, 54746, 54748,
    54749, 54751, 54752, 54754, 54755, 54757, 54758, 54760,
    54761, 54763, 54764, 54766, 54767, 54769, 54770, 54772,
    54773, 54775, 54776, 54778, 54779, 54781, 54782, 54784,
    54785, 54787, 54788, 54790, 54791, 54793, 54794, 54796,
    54797, 54799, 54800, 54802, 54803, 54805, 54806, 54808,
    54809, 54811, 54812, 54814, 54815, 54817, 54818, 54820,
    54821, 54823, 54824, 54826, 54827, 54829, 54830, 54832,
    54833, 54834, 54836, 54837, 54839, 54840, 54842, 54843,
    54845, 54846, 54848, 54849, 54851, 54852, 54854, 54855,
    54857, 54858, 54860, 54861, 54863, 54864, 54866, 54867,
    54869, 54870, 54872, 54873, 54875, 54876, 54878, 54879,
    54881, 54882, 54884, 54885, 54887, 54888, 54890, 54891,
    54893, 54894, 54896, 54897, 54899, 54900, 54902, 54903,
    54905, 54906, 54908, 54909, 54911, 54912, 54914, 54915,
    54917, 54918, 54920, 54921, 54923, 54924, 54926, 54927,
    54929, 54930, 54932, 54933, 54935, 54936, 54938, 54939,
    54941, 54942, 54944, 54945, 54947, 54948, 54950, 54951,
    54953, 54954, 54956, 54957, 54959, 54960, 54962, 54963,
    54965, 54966, 54967, 54969, 54970, 54972, 54973, 54975,
    54976, 54978, 54979, 54981, 54982, 54984, 54985, 54987,
    54988, 54990, 54991, 54993, 54994, 54996, 54997, 54999,
    55000, 55002, 55003, 55005, 55006, 55008, 55009, 55011,
    55012, 55014, 55015, 55017, 55018, 55020, 55021, 55023,
    55024, 55026, 55027, 55029, 55030, 55032, 55033, 55035,
    55036, 55038, 55039, 55041, 55042, 55044, 55045, 55047,
    55048, 55050, 55051, 55053, 55054, 55056, 55057, 55059,
    55060, 55062, 55063, 55065, 55066, 55068, 55069, 55071,
    55072, 55074, 55075, 55077, 55078, 55080, 55081, 55083,
    55084, 55086, 55087, 55089, 55090, 55092, 55093, 55095,
    55096, 55098, 55099, 55101, 55102, 55104, 55105, 55107,
    55108, 55110, 55111, 55113, 55114, 55116, 55117, 55119,
    55120, 55122, 55123, 55125, 55126, 55128, 55129, 55131,
    55132, 55134, 55135, 55137, 55138, 55140, 55141, 55143,
    55144, 55146, 55147, 55149, 55150, 55152, 55153, 55155,
    55156, 55158, 55159, 55161, 55162, 55164, 55165, 55167,
    55168, 55170, 55171, 55173, 55174, 55176, 55177, 55179,
    55180, 55182, 55183, 55185, 55186, 55188, 55189, 55191,
    55192, 55194, 55195, 55197, 55198, 55200, 55201, 55203,
    55204, 55206, 55207, 55209, 55210, 55212, 55213, 55215,
    55216, 55218, 55219, 55221, 55222, 55224, 55225, 55227,
    55228, 55230, 55231, 55233, 55234, 55236, 55237, 55239,
    55240, 55242, 55243, 55245, 55246, 55248, 55249, 55251,
    55252, 55254, 55255, 55257, 55258, 55260, 55261, 55263,
    55264, 55266, 55267, 55269, 55270, 55272, 55274, 55275,
    55277, 55278, 55280, 55281, 55283, 55284, 55286, 55287,
    55289, 55290, 55292, 55293, 55295, 55296, 55298, 55299,
    55301, 55302, 55304, 55305, 55307, 55308, 55310, 55311,
    55313, 55314, 55316, 55317, 55319, 55320, 55322, 55323,
    55325, 55326, 55328, 55329, 55331, 55332, 55334, 55335,
    55337, 55338, 55340, 55341, 55343, 55344, 55346, 55347,
    55349, 55350, 55352, 55353, 55355, 55356, 55358, 55359,
    55361, 55362, 55364, 55365, 55367, 55368, 55370, 55371,
    55373, 55374, 55376, 55377, 55379, 55380, 55382, 55383,
    55385, 55386, 55388, 55389, 55391, 55392, 55394, 55395,
    55397, 55398, 55400, 55401, 55403, 55404, 55406, 55408,
    55409, 55411, 55412, 55414, 55415, 55417, 55418, 55420,
    55421, 55423, 55424, 55426, 55427, 55429, 55430, 55432,
    55433, 55435, 55436, 55438, 55439, 55441, 55442, 55444,
    55445, 55447, 55448, 55450, 55451, 55453, 55454, 55456,
    55457, 55459, 55460, 55462, 55463, 55465, 55466, 55468,
    55469, 55471, 55472, 55474, 55475, 55477, 55478, 55480,
    55481, 55483, 55484, 55486, 55487, 55489, 55490, 55492,
    55493, 55495, 55497, 55498, 55500, 55501, 55503, 55504,
    55506, 55507, 55509, 55510, 55512, 55513, 55515, 55516,
    55518, 55519, 55521, 55522, 55524, 55525, 55527, 55528,
    55530, 55531, 55533, 55534, 55536, 55537, 55539, 55540,
    55542, 55543, 55545, 55546, 55548, 55549, 55551, 55552,
    55554, 55555, 55557, 55558, 55560, 55561, 55563, 55564,
    55566, 55568, 55569, 55571, 55572, 55574, 55575, 55577,
    55578, 55580, 55581, 55583, 55584, 55586, 55587, 55589,
    55590, 55592, 55593, 55595, 55596, 55598, 55599, 55601,
    55602, 55604, 55605, 55607, 55608, 55610, 55611, 55613,
    55614, 55616, 55617, 55619, 55620, 55622, 55623, 55625,
    55626, 55628, 55630, 55631, 55633, 55634, 55636, 55637,
    55639, 55640, 55642, 55643, 55645, 55646, 55648, 55649,
    55651, 55652, 55654, 55655, 55657, 55658, 55660, 55661,
    55663, 55664, 55666, 55667, 55669, 55670, 55672, 55673,
    55675, 55676, 55678, 55679, 55681, 55683, 55684, 55686,
    55687, 55689, 55690, 55692, 55693, 55695, 55696, 55698,
    55699, 55701, 55702, 55704, 55705, 55707, 55708, 55710,
    55711, 55713, 55714, 55716, 55717, 55719, 55720, 55722,
    55723, 55725, 55726, 55728, 55729, 55731, 55733, 55734,
    55736, 55737, 55739, 55740, 55742, 55743, 55745, 55746,
    55748, 55749, 55751, 55752, 55754, 55755, 55757, 55758,
    55760, 55761, 55763, 55764, 55766, 55767, 55769, 55770,
    55772, 55773, 55775, 55776, 55778, 55780, 55781, 55783,
    55784, 55786, 55787, 55789, 55790, 55792, 55793, 55795,
    55796, 55798, 55799, 55801, 55802, 55804, 55805, 55807,
    55808, 55810, 55811, 55813, 55814, 55816, 55817, 55819,
    55821, 55822, 55824, 55825, 55827, 55828, 55830, 55831,
    55833, 55834, 55836, 55837, 55839, 55840, 55842, 55843,
    55845, 55846, 55848, 55849, 55851, 55852, 55854, 55855,
    55857, 55858, 55860, 55862, 55863, 55865, 55866, 55868,
    55869, 55871, 55872, 55874, 55875, 55877, 55878, 55880,
    55881, 55883, 55884, 55886, 55887, 55889, 55890, 55892,
    55893, 55895, 55896, 55898, 55900, 55901, 55903, 55904,
    55906, 55907, 55909, 55910, 55912, 55913, 55915, 55916,
    55918, 55919, 55921, 55922, 55924, 55925, 55927, 55928,
    55930, 55931, 55933, 55934, 55936, 55938, 55939, 55941,
    55942, 55944, 55945, 55947, 55948, 55950, 55951, 55953,
    55954, 55956, 55957, 55959, 55960, 55962, 55963, 55965,
    55966, 55968, 55969, 55971, 55973, 55974, 55976, 55977,
    55979, 55980, 55982, 55983, 55985, 55986, 55988, 55989,
    55991, 55992, 55994, 55995, 55997, 55998, 56000, 56001,
    56003, 56005, 56006, 56008, 56009, 56011, 56012, 56014,
    56015, 56017, 56018, 56020, 56021, 56023, 56024, 56026,
    56027, 56029, 56030, 56032, 56033, 56035, 56036, 56038,
    56040, 56041, 56043, 56044, 56046, 56047, 56049, 56050,
    56052, 56053, 56055, 56056, 56058, 56059, 56061, 56062,
    56064, 56065, 56067, 56069, 56070, 56072, 56073, 56075,
    56076, 56078, 56079, 56081, 56082, 56084, 56085, 56087,
    56088, 56090, 56091, 56093, 56094, 56096, 56097, 56099,
    56101, 56102, 56104, 56105, 56107, 56108, 56110, 56111,
    56113, 56114, 56116, 56117, 56119, 56120, 56122, 56123,
    56125, 56126, 56128, 56130, 56131, 56133, 56134, 56136,
    56137, 56139, 56140, 56142, 56143, 56145, 56146, 56148,
    56149, 56151, 56152, 56154, 56155, 56157, 56159, 56160,
    56162, 56163, 56165, 56166, 56168, 56169, 56171, 56172,
    56174, 56175, 56177, 56178, 56180, 56181, 56183, 56185,
    56186, 56188, 56189, 56191, 56192, 56194, 56195, 56197,
    56198, 56200, 56201, 56203, 56204, 56206, 56207, 56209,
    56210, 56212, 56214, 56215, 56217, 56218, 56220, 56221,
    56223, 56224, 56226, 56227, 56229, 56230, 56232, 56233,
    56235, 56236, 56238, 56240, 56241, 56243, 56244, 56246,
    56247, 56249, 56250, 56252, 56253, 56255, 56256, 56258,
    56259, 56261, 56262, 56264, 56266, 56267, 56269, 56270,
    56272, 56273, 56275, 56276, 56278, 56279, 56281, 56282,
    56284, 56285, 56287, 56289, 56290, 56292, 56293, 56295,
    56296, 56298, 56299, 56301, 56302, 56304, 56305, 56307,
    56308, 56310, 56311, 56313, 56315, 56316, 56318, 56319,
    56321, 56322, 56324, 56325, 56327, 56328, 56330, 56331,
    56333, 56334, 56336, 56338, 56339, 56341, 56342, 56344,
    56345, 56347, 56348, 56350, 56351, 56353, 56354, 56356,
    56357, 56359, 56361, 56362, 56364, 56365, 56367, 56368,
    56370, 56371, 56373, 56374, 56376, 56377, 56379, 56380,
    56382, 56384, 56385, 56387, 56388, 56390, 56391, 56393,
    56394, 56396, 56397, 56399, 56400, 56402, 56403, 56405,
    56407, 56408, 56410, 56411, 56413, 56414, 56416, 56417,
    56419, 56420, 56422, 56423, 56425, 56426, 56428, 56430,
    56431, 56433, 56434, 56436, 56437, 56439, 56440, 56442,
    56443, 56445, 56446, 56448, 56449, 56451, 56453, 56454,
    56456, 56457, 56459, 56460, 56462, 56463, 56465, 56466,
    56468, 56469, 56471, 56473, 56474, 56476, 56477, 56479,
    56480, 56482, 56483, 56485, 56486, 56488, 56489, 56491,
    56492, 56494, 56496, 56497, 56499, 56500, 56502, 56503,
    56505, 56506, 56508, 56509, 56511, 56512, 56514, 56516,
    56517, 56519, 56520, 56522, 56523, 56525, 56526, 56528,
    56529, 56531, 56532, 56534, 56536, 56537, 56539, 56540,
    56542, 56543, 56545, 56546, 56548, 56549, 56551, 56552,
    56554, 56555, 56557, 56559, 56560, 56562, 56563, 56565,
    56566, 56568, 56569, 56571, 56572, 56574, 56575, 56577,
    56579, 56580, 56582, 56583, 56585, 56586, 56588, 56589,
    56591, 56592, 56594, 56596, 56597, 56599, 56600, 56602,
    56603, 56605, 56606, 56608, 56609, 56611, 56612, 56614,
    56616, 56617, 56619, 56620, 56622, 56623, 56625, 56626,
    56628, 56629, 56631, 56632, 56634, 56636, 56637, 56639,
    56640, 56642, 56643, 56645, 56646, 56648, 56649, 56651,
    56652, 56654, 56656, 56657, 56659, 56660, 56662, 56663,
    56665, 56666, 56668, 56669, 56671, 56673, 56674, 56676,
    56677, 56679, 56680, 56682, 56683, 56685, 56686, 56688,
    56689, 56691, 56693, 56694, 56696, 56697, 56699, 56700,
    56702, 56703, 56705, 56706, 56708, 56710, 56711, 56713,
    56714, 56716, 56717, 56719, 56720, 56722, 56723, 56725,
    56726, 56728, 56730, 56731, 56733, 56734, 56736, 56737,
    56739, 56740, 56742, 56743, 56745, 56747, 56748, 56750,
    56751, 56753, 56754, 56756, 56757, 56759, 56760, 56762,
    56764, 56765, 56767, 56768, 56770, 56771, 56773, 56774,
    56776, 56777, 56779, 56781, 56782, 56784, 56785, 56787,
    56788, 56790, 56791, 56793, 56794, 56796, 56797, 56799,
    56801, 56802, 56804, 56805, 56807, 56808, 56810, 56811,
    56813, 56814, 56816, 56818, 56819, 56821, 56822, 56824,
    56825, 56827, 56828, 56830, 56831, 56833, 56835, 56836,
    56838, 56839, 56841, 56842, 56844, 56845, 56847, 56848,
    56850, 56852, 56853, 56855, 56856, 56858, 56859, 56861,
    56862, 56864, 56866, 56867, 56869, 56870, 56872, 56873,
    56875, 56876, 56878, 56879, 56881, 56883, 56884, 56886,
    56887, 56889, 56890, 56892, 56893, 56895, 56896, 56898,
    56900, 56901, 56903, 56904, 56906, 56907, 56909, 56910,
    56912, 56913, 56915, 56917, 56918, 56920, 56921, 56923,
    56924, 56926, 56927, 56929, 56930, 56932, 56934, 56935,
    56937, 56938, 56940, 56941, 56943, 56944, 56946, 56948,
    56949, 56951, 56952, 56954, 56955, 56957, 56958, 56960,
    56961, 56963, 56965, 56966, 56968, 56969, 56971, 56972,
    56974, 56975, 56977, 56979, 56980, 56982, 56983, 56985,
    56986, 56988, 56989, 56991, 56992, 56994, 56996, 56997,
    56999, 57000, 57002, 57003, 57005, 57006, 57008, 57010,
    57011, 57013, 57014, 57016, 57017, 57019, 57020, 57022,
    57023, 57025, 57027, 57028, 57030, 57031, 57033, 57034,
    57036, 57037, 57039, 57041, 57042, 57044, 57045, 57047,
    57048, 57050, 57051, 57053, 57055, 57056, 57058, 57059,
    57061, 57062, 57064, 57065, 57067, 57068, 57070, 57072,
    57073, 57075, 57076, 57078, 57079, 57081, 57082, 57084,
    57086, 57087, 57089, 57090, 57092, 57093, 57095, 57096,
    57098, 57100, 57101, 57103, 57104, 57106, 57107, 57109,
    57110, 57112, 57114, 57115, 57117, 57118, 57120, 57121,
    57123, 57124, 57126, 57127, 57129, 57131, 57132, 57134,
    57135, 57137, 57138, 57140, 57141, 57143, 57145, 57146,
    57148, 57149, 57151, 57152, 57154, 57155, 57157, 57159,
    57160, 57162, 57163, 57165, 57166, 57168, 57169, 57171,
    57173, 57174, 57176, 57177, 57179, 57180, 57182, 57183,
    57185, 57187, 57188, 57190, 57191, 57193, 57194, 57196,
    57197, 57199, 57201, 57202, 57204, 57205, 57207, 57208,
    57210, 57211, 57213, 57215, 57216, 57218, 57219, 57221,
    57222, 57224, 57225, 57227, 57229, 57230, 57232, 57233,
    57235, 57236, 57238, 57239, 57241, 57243, 57244, 57246,
    57247, 57249, 57250, 57252, 57254, 57255, 57257, 57258,
    57260, 57261, 57263, 57264, 57266, 57268, 57269, 57271,
    57272, 57274, 57275, 57277, 57278, 57280, 57282, 57283,
    57285, 57286, 57288, 57289, 57291, 57292, 57294, 57296,
    57297, 57299, 57300, 57302, 57303, 57305, 57306, 57308,
    57310, 57311, 57313, 57314, 57316, 57317, 57319, 57321,
    57322, 57324, 57325, 57327, 57328, 57330, 57331, 57333,
    57335, 57336, 57338, 57339, 57341, 57342, 57344, 57345,
    57347, 57349, 57350, 57352, 57353, 57355, 57356, 57358,
    57360, 57361, 57363, 57364, 57366, 57367, 57369, 57370,
    57372, 57374, 57375, 57377, 57378, 57380, 57381, 57383,
    57384, 57386, 57388, 57389, 57391, 57392, 57394, 57395,
    57397, 57399, 57400, 57402, 57403, 57405, 57406, 57408,
    57409, 57411, 57413, 57414, 57416, 57417, 57419, 57420,
    57422, 57424, 57425, 57427, 57428, 57430, 57431, 57433,
    57434, 57436, 57438, 57439, 57441, 57442, 57444, 57445,
    57447, 57449, 57450, 57452, 57453, 57455, 57456, 57458,
    57459, 57461, 57463, 57464, 57466, 57467, 57469, 57470,
    57472, 57474, 57475, 57477, 57478, 57480, 57481, 57483,
    57485, 57486, 57488, 57489, 57491, 57492, 57494, 57495,
    57497, 57499, 57500, 57502, 57503, 57505, 57506, 57508,
    57510, 57511, 57513, 57514, 57516, 57517, 57519, 57520,
    57522, 57524, 57525, 57527, 57528, 57530, 57531, 57533,
    57535, 57536, 57538, 57539, 57541, 57542, 57544, 57546,
    57547, 57549, 57550, 57552, 57553, 57555, 57557, 57558,
    57560, 57561, 57563, 57564, 57566, 57567, 57569, 57571,
    57572, 57574, 57575, 57577, 57578, 57580, 57582, 57583,
    57585, 57586, 57588, 57589, 57591, 57593, 57594, 57596,
    57597, 57599, 57600, 57602, 57604, 57605, 57607, 57608,
    57610, 57611, 57613, 57614, 57616, 57618, 57619, 57621,
    57622, 57624, 57625, 57627, 57629, 57630, 57632, 57633,
    57635, 57636, 57638, 57640, 57641, 57643, 57644, 57646,
    57647, 57649, 57651, 57652, 57654, 57655, 57657, 57658,
    57660, 57662, 57663, 57665, 57666, 57668, 57669, 57671,
    57673, 57674, 57676, 57677, 57679, 57680, 57682, 57684,
    57685, 57687, 57688, 57690, 57691, 57693, 57695, 57696,
    57698, 57699, 57701, 57702, 57704, 57705, 57707, 57709,
    57710, 57712, 57713, 57715, 57716, 57718, 57720, 57721,
    57723, 57724, 57726, 57727, 57729, 57731, 57732, 57734,
    57735, 57737, 57738, 57740, 57742, 57743, 57745, 57746,
    57748, 57749, 57751, 57753, 57754, 57756, 57757, 57759,
    57760, 57762, 57764, 57765, 57767, 57768, 57770, 57771,
    57773, 57775, 57776, 57778, 57779, 57781, 57783, 57784,
    57786, 57787, 57789, 57790, 57792, 57794, 57795, 57797,
    57798, 57800, 57801, 57803, 57805, 57806, 57808, 57809,
    57811, 57812, 57814, 57816, 57817, 57819, 57820, 57822,
    57823, 57825, 57827, 57828, 57830, 57831, 57833, 57834,
    57836, 57838, 57839, 57841, 57842, 57844, 57845, 57847,
    57849, 57850, 57852, 57853, 57855, 57856, 57858, 57860,
    57861, 57863, 57864, 57866, 57867, 57869, 57871, 57872,
    57874, 57875, 57877, 57879, 57880, 57882, 57883, 57885,
    57886, 57888, 57890, 57891, 57893, 57894, 57896, 57897,
    57899, 57901, 57902, 57904, 57905, 57907, 57908, 57910,
    57912, 57913, 57915, 57916, 57918, 57920, 57921, 57923,
    57924, 57926, 57927, 57929, 57931, 57932, 57934, 57935,
    57937, 57938, 57940, 57942, 57943, 57945, 57946, 57948,
    57949, 57951, 57953, 57954, 57956, 57957, 57959, 57961,
    57962, 57964, 57965, 57967, 57968, 57970, 57972, 57973,
    57975, 57976, 57978, 57979, 57981, 57983, 57984, 57986,
    57987, 57989, 57991, 57992, 57994, 57995, 57997, 57998,
    58000, 58002, 58003, 58005, 58006, 58008, 58009, 58011,
    58013, 58014, 58016, 58017, 58019, 58021, 58022, 58024,
    58025, 58027, 58028, 58030, 58032, 58033, 58035, 58036,
    58038, 58039, 58041, 58043, 58044, 58046, 58047, 58049,
    58051, 58052, 58054, 58055, 58057, 58058, 58060, 58062,
    58063, 58065, 58066, 58068, 58070, 58071, 58073, 58074,
    58076, 58077, 58079, 58081, 58082, 58084, 58085, 58087,
    58088, 58090, 58092, 58093, 58095, 58096, 58098, 58100,
    58101, 58103, 58104, 58106, 58107, 58109, 58111, 58112,
    58114, 58115, 58117, 58119, 58120, 58122, 58123, 58125,
    58126, 58128, 58130, 58131, 58133, 58134, 58136, 58138,
    58139, 58141, 58142, 58144, 58145, 58147, 58149, 58150,
    58152, 58153, 58155, 58157, 58158, 58160, 58161, 58163,
    58164, 58166, 58168, 58169, 58171, 58172, 58174, 58176,
    58177, 58179, 58180, 58182, 58183, 58185, 58187, 58188,
    58190, 58191, 58193, 58195, 58196, 58198, 58199, 58201,
    58202, 58204, 58206, 58207, 58209, 58210, 58212, 58214,
    58215, 58217, 58218, 58220, 58222, 58223, 58225, 58226,
    58228, 58229, 58231, 58233, 58234, 58236, 58237, 58239,
    58241, 58242, 58244, 58245, 58247, 58248, 58250, 58252,
    58253, 58255, 58256, 58258, 58260, 58261, 58263, 58264,
    58266, 58268, 58269, 58271, 58272, 58274, 58275, 58277,
    58279, 58280, 58282, 58283, 58285, 58287, 58288, 58290,
    58291, 58293, 58294, 58296, 58298, 58299, 58301, 58302,
    58304, 58306, 58307, 58309, 58310, 58312, 58314, 58315,
    58317, 58318, 58320, 58321, 58323, 58325, 58326, 58328,
    58329, 58331, 58333, 58334, 58336, 58337, 58339, 58341,
    58342, 58344, 58345, 58347, 58349, 58350, 58352, 58353,
    58355, 58356, 58358, 58360, 58361, 58363, 58364, 58366,
    58368, 58369, 58371, 58372, 58374, 58376, 58377, 58379,
    58380, 58382, 58383, 58385, 58387, 58388, 58390, 58391,
    58393, 58395, 58396, 58398, 58399, 58401, 58403, 58404,
    58406, 58407, 58409, 58411, 58412, 58414, 58415, 58417,
    58418, 58420, 58422, 58423, 58425, 58426, 58428, 58430,
    58431, 58433, 58434, 58436, 58438, 58439, 58441, 58442,
    58444, 58446, 58447, 58449, 58450, 58452, 58454, 58455,
    58457, 58458, 58460, 58461, 58463, 58465, 58466, 58468,
    58469, 58471, 58473, 58474, 58476, 58477, 58479, 58481,
    58482, 58484, 58485, 58487, 58489, 58490, 58492, 58493,
    58495, 58497, 58498, 58500, 58501, 58503, 58505, 58506,
    58508, 58509, 58511, 58512, 58514, 58516, 58517, 58519,
    58520, 58522, 58524, 58525, 58527, 58528, 58530, 58532,
    58533, 58535, 58536, 58538, 58540, 58541, 58543, 58544,
    58546, 58548, 58549, 58551, 58552, 58554, 58556, 58557,
    58559, 58560, 58562, 58564, 58565, 58567, 58568, 58570,
    58572, 58573, 58575, 58576, 58578, 58579, 58581, 58583,
    58584, 58586, 58587, 58589, 58591, 58592, 58594, 58595,
    58597, 58599, 58600, 58602, 58603, 58605, 58607, 58608,
    58610, 58611, 58613, 58615, 58616, 58618, 58619, 58621,
    58623, 58624, 58626, 58627, 58629, 58631, 58632, 58634,
    58635, 58637, 58639, 58640, 58642, 58643, 58645, 58647,
    58648, 58650, 58651, 58653, 58655, 58656, 58658, 58659,
    58661, 58663, 58664, 58666, 58667, 58669, 58671, 58672,
    58674, 58675, 58677, 58679, 58680, 58682, 58683, 58685,
    58687, 58688, 58690, 58691, 58693, 58695, 58696, 58698,
    58699, 58701, 58703, 58704, 58706, 58707, 58709, 58711,
    58712, 58714, 58715, 58717, 58719, 58720, 58722, 58723,
    58725, 58727, 58728, 58730, 58731, 58733, 58735, 58736,
    58738, 58739, 58741, 58743, 58744, 58746, 58747, 58749,
    58751, 58752, 58754, 58755, 58757, 58759, 58760, 58762,
    58763, 58765, 58767, 58768, 58770, 58771, 58773, 58775,
    58776, 58778, 58779, 58781, 58783, 58784, 58786, 58787,
    58789, 58791, 58792, 58794, 58795, 58797, 58799, 58800,
    58802, 58803, 58805, 58807, 58808, 58810, 58811, 58813,
    58815, 58816, 58818, 58819, 58821, 58823, 58824, 58826,
    58828, 58829, 58831, 58832, 58834, 58836, 58837, 58839,
    58840, 58842, 58844, 58845, 58847, 58848, 58850, 58852,
    58853, 58855, 58856, 58858, 58860, 58861, 58863, 58864,
    58866, 58868, 58869, 58871, 58872, 58874, 58876, 58877,
    58879, 58880, 58882, 58884, 58885, 58887, 58888, 58890,
    58892, 58893, 58895, 58897, 58898, 58900, 58901, 58903,
    58905, 58906, 58908, 58909, 58911, 58913, 58914, 58916,
    58917, 58919, 58921, 58922, 58924, 58925, 58927, 58929,
    58930, 58932, 58933, 58935, 58937, 58938, 58940, 58942,
    58943, 58945, 58946, 58948, 58950, 58951, 58953, 58954,
    58956, 58958, 58959, 58961, 58962, 58964, 58966, 58967,
    58969, 58970, 58972, 58974, 58975, 58977, 58979, 58980,
    58982, 58983, 58985, 58987, 58988, 58990, 58991, 58993,
    58995, 58996, 58998, 58999, 59001, 59003, 59004, 59006,
    59007, 59009, 59011, 59012, 59014, 59016, 59017, 59019,
    59020, 59022, 59024, 59025, 59027, 59028, 59030, 59032,
    59033, 59035, 59036, 59038, 59040, 59041, 59043, 59044,
    59046, 59048, 59049, 59051, 59053, 59054, 59056, 59057,
    59059, 59061, 59062, 59064, 59065, 59067, 59069, 59070,
    59072, 59073, 59075, 59077, 59078, 59080, 59082, 59083,
    59085, 59086, 59088, 59090, 59091, 59093, 59094, 59096,
    59098, 59099, 59101, 59103, 59104, 59106, 59107, 59109,
    59111, 59112, 59114, 59115, 59117, 59119, 59120, 59122,
    59123, 59125, 59127, 59128, 59130, 59132, 59133, 59135,
    59136, 59138, 59140, 59141, 59143, 59144, 59146, 59148,
    59149, 59151, 59153, 59154, 59156, 59157, 59159, 59161,
    59162, 59164, 59165, 59167, 59169, 59170, 59172, 59174,
    59175, 59177, 59178, 59180, 59182, 59183, 59185, 59186,
    59188, 59190, 59191, 59193, 59195, 59196, 59198, 59199,
    59201, 59203, 59204, 59206, 59207, 59209, 59211, 59212,
    59214, 59216, 59217, 59219, 59220, 59222, 59224, 59225,
    59227, 59228, 59230, 59232, 59233, 59235, 59237, 59238,
    59240, 59241, 59243, 59245, 59246, 59248, 59249, 59251,
    59253, 59254, 59256, 59258, 59259, 59261, 59262, 59264,
    59266, 59267, 59269, 59270, 59272, 59274, 59275, 59277,
    59279, 59280, 59282, 59283, 59285, 59287, 59288, 59290,
    59292, 59293, 59295, 59296, 59298, 59300, 59301, 59303,
    59304, 59306, 59308, 59309, 59311, 59313, 59314, 59316,
    59317, 59319, 59321, 59322, 59324, 59326, 59327, 59329,
    59330, 59332, 59334, 59335, 59337, 59338, 59340, 59342,
    59343, 59345, 59347, 59348, 59350, 59351, 59353, 59355,
    59356, 59358, 59360, 59361, 59363, 59364, 59366, 59368,
    59369, 59371, 59373, 59374, 59376, 59377, 59379, 59381,
    59382, 59384, 59385, 59387, 59389, 59390, 59392, 59394,
    59395, 59397, 59398, 59400, 59402, 59403, 59405, 59407,
    59408, 59410, 59411, 59413, 59415, 59416, 59418, 59420,
    59421, 59423, 59424, 59426, 59428, 59429, 59431, 59433,
    59434, 59436, 59437, 59439, 59441, 59442, 59444, 59445,
    59447, 59449, 59450, 59452, 59454, 59455, 59457, 59458,
    59460, 59462, 59463, 59465, 59467, 59468, 59470, 59471,
    59473, 59475, 59476, 59478, 59480, 59481, 59483, 59484,
    59486, 59488, 59489, 59491, 59493, 59494, 59496, 59497,
    59499, 59501, 59502, 59504, 59506, 59507, 59509, 59510,
    59512, 59514, 59515, 59517, 59519, 59520, 59522, 59523,
    59525, 59527, 59528, 59530, 59532, 59533, 59535, 59536,
    59538, 59540, 59541, 59543, 59545, 59546, 59548, 59549,
    59551, 59553, 59554, 59556, 59558, 59559, 59561, 59563,
    59564, 59566, 59567, 59569, 59571, 59572, 59574, 59576,
    59577, 59579, 59580, 59582, 59584, 59585, 59587, 59589,
    59590, 59592, 59593, 59595, 59597, 59598, 59600, 59602,
    59603, 59605, 59606, 59608, 59610, 59611, 59613, 59615,
    59616, 59618, 59619, 59621, 59623, 59624, 59626, 59628,
    59629, 59631, 59633, 59634, 59636, 59637, 59639, 59641,
    59642, 59644, 59646, 59647, 59649, 59650, 59652, 59654,
    59655, 59657, 59659, 59660, 59662, 59663, 59665, 59667,
    59668, 59670, 59672, 59673, 59675, 59677, 59678, 59680,
    59681, 59683, 59685, 59686, 59688, 59690, 59691, 59693,
    59694, 59696, 59698, 59699, 59701, 59703, 59704, 59706,
    59708, 59709, 59711, 59712, 59714, 59716, 59717, 59719,
    59721, 59722, 59724, 59725, 59727, 59729, 59730, 59732,
    59734, 59735, 59737, 59739, 59740, 59742, 59743, 59745,
    59747, 59748, 59750, 59752, 59753, 59755, 59756, 59758,
    59760, 59761, 59763, 59765, 59766, 59768, 59770, 59771,
    59773, 59774, 59776, 59778, 59779, 59781, 59783, 59784,
    59786, 59788, 59789, 59791, 59792, 59794, 59796, 59797,
    59799, 59801, 59802, 59804, 59805, 59807, 59809, 59810,
    59812, 59814, 59815, 59817, 59819, 59820, 59822, 59823,
    59825, 59827, 59828, 59830, 59832, 59833, 59835, 59837,
    59838, 59840, 59841, 59843, 59845, 59846, 59848, 59850,
    59851, 59853, 59855, 59856, 59858, 59859, 59861, 59863,
    59864, 59866, 59868, 59869, 59871, 59873, 59874, 59876,
    59877, 59879, 59881, 59882, 59884, 59886, 59887, 59889,
    59891, 59892, 59894, 59895, 59897, 59899, 59900, 59902,
    59904, 59905, 59907, 59909, 59910, 59912, 59914, 59915,
    59917, 59918, 59920, 59922, 59923, 59925, 59927, 59928,
    59930, 59932, 59933, 59935, 59936, 59938, 59940, 59941,
    59943, 59945, 59946, 59948, 59950, 59951, 59953, 59954,
    59956, 59958, 59959, 59961, 59963, 59964, 59966, 59968,
    59969, 59971, 59973, 59974, 59976, 59977, 59979, 59981,
    59982, 59984, 59986, 59987, 59989, 59991, 59992, 59994,
    59995, 59997, 59999, 60000, 60002, 60004, 60005, 60007,
    60009, 60010, 60012, 60014, 60015, 60017, 60018, 60020,
    60022, 60023, 60025, 60027, 60028, 60030, 60032, 60033,
    60035, 60037, 60038, 60040, 60041, 60043, 60045, 60046,
    60048, 60050, 60051, 60053, 60055, 60056, 60058, 60060,
    60061, 60063, 60064, 60066, 60068, 60069, 60071, 60073,
    60074, 60076, 60078, 60079, 60081, 60083, 60084, 60086,
    60087, 60089, 60091, 60092, 60094, 60096, 60097, 60099,
    60101, 60102, 60104, 60106, 60107, 60109, 60110, 60112,
    60114, 60115, 60117, 60119, 60120, 60122, 60124, 60125,
    60127, 60129, 60130, 60132, 60134, 60135, 60137, 60138,
    60140, 60142, 60143, 60145, 60147, 60148, 60150, 60152,
    60153, 60155, 60157, 60158, 60160, 60161, 60163, 60165,
    60166, 60168, 60170, 60171, 60173, 60175, 60176, 60178,
    60180, 60181, 60183, 60185, 60186, 60188, 60189, 60191,
    60193, 60194, 60196, 60198, 60199, 60201, 60203, 60204,
    60206, 60208, 60209, 60211, 60213, 60214, 60216, 60217,
    60219, 60221, 60222, 60224, 60226, 60227, 60229, 60231,
    60232, 60234, 60236, 60237, 60239, 60241, 60242, 60244,
    60246, 60247, 60249, 60250, 60252, 60254, 60255, 60257,
    60259, 60260, 60262, 60264, 60265, 60267, 60269, 60270,
    60272, 60274, 60275, 60277, 60279, 60280, 60282, 60283,
    60285, 60287, 60288, 60290, 60292, 60293, 60295, 60297,
    60298, 60300, 60302, 60303, 60305, 60307, 60308, 60310,
    60312, 60313, 60315, 60316, 60318, 60320, 60321, 60323,
    60325, 60326, 60328, 60330, 60331, 60333, 60335, 60336,
    60338, 60340, 60341, 60343, 60345, 60346, 60348, 60350,
    60351, 60353, 60354, 60356, 60358, 60359, 60361, 60363,
    60364, 60366, 60368, 60369, 60371, 60373, 60374, 60376,
    60378, 60379, 60381, 60383, 60384, 60386, 60388, 60389,
    60391, 60393, 60394, 60396, 60397, 60399, 60401, 60402,
    60404, 60406, 60407, 60409, 60411, 60412, 60414, 60416,
    60417, 60419, 60421, 60422, 60424, 60426, 60427, 60429,
    60431, 60432, 60434, 60436, 60437, 60439, 60440, 60442,
    60444, 60445, 60447, 60449, 60450, 60452, 60454, 60455,
    60457, 60459, 60460, 60462, 60464, 60465, 60467, 60469,
    60470, 60472, 60474, 60475, 60477, 60479, 60480, 60482,
    60484, 60485, 60487, 60489, 60490, 60492, 60494, 60495,
    60497, 60498, 60500, 60502, 60503, 60505, 60507, 60508,
    60510, 60512, 60513, 60515, 60517, 60518, 60520, 60522,
    60523, 60525, 60527, 60528, 60530, 60532, 60533, 60535,
    60537, 60538, 60540, 60542, 60543, 60545, 60547, 60548,
    60550, 60552, 60553, 60555, 60557, 60558, 60560, 60561,
    60563, 60565, 60566, 60568, 60570, 60571, 60573, 60575,
    60576, 60578, 60580, 60581, 60583, 60585, 60586, 60588,
    60590, 60591, 60593, 60595, 60596, 60598, 60600, 60601,
    60603, 60605, 60606, 60608, 60610, 60611, 60613, 60615,
    60616, 60618, 60620, 60621, 60623, 60625, 60626, 60628,
    60630, 60631, 60633, 60635, 60636, 60638, 60640, 60641,
    60643, 60645, 60646, 60648, 60650, 60651, 60653, 60655,
    60656, 60658, 60660, 60661, 60663, 60665, 60666, 60668,
    60669, 60671, 60673, 60674, 60676, 60678, 60679, 60681,
    60683, 60684, 60686, 60688, 60689, 60691, 60693, 60694,
    60696, 60698, 60699, 60701, 60703, 60704, 60706, 60708,
    60709, 60711, 60713, 60714, 60716, 60718, 60719, 60721,
    60723, 60724, 60726, 60728, 60729, 60731, 60733, 60734,
    60736, 60738, 60739, 60741, 60743, 60744, 60746, 60748,
    60749, 60751, 60753, 60754, 60756, 60758, 60759, 60761,
    60763, 60764, 60766, 60768, 60769, 60771, 60773, 60774,
    60776, 60778, 60779, 60781, 60783, 60784, 60786, 60788,
    60789, 60791, 60793, 60794, 60796, 60798, 60799, 60801,
    60803, 60804, 60806, 60808, 60809, 60811, 60813, 60814,
    60816, 60818, 60819, 60821, 60823, 60824, 60826, 60828,
    60829, 60831, 60833, 60834, 60836, 60838, 60839, 60841,
    60843, 60844, 60846, 60848, 60849, 60851, 60853, 60854,
    60856, 60858, 60859, 60861, 60863, 60864, 60866, 60868,
    60869, 60871, 60873, 60874, 60876, 60878, 60880, 60881,
    60883, 60885, 60886, 60888, 60890, 60891, 60893, 60895,
    60896, 60898, 60900, 60901, 60903, 60905, 60906, 60908,
    60910, 60911, 60913, 60915, 60916, 60918, 60920, 60921,
    60923, 60925, 60926, 60928, 60930, 60931, 60933, 60935,
    60936, 60938, 60940, 60941, 60943, 60945, 60946, 60948,
    60950, 60951, 60953, 60955, 60956, 60958, 60960, 60961,
    60963, 60965, 60966, 60968, 60970, 60971, 60973, 60975,
    60976, 60978, 60980, 60982, 60983, 60985, 60987, 60988,
    60990, 60992, 60993, 60995, 60997, 60998, 61000, 61002,
    61003, 61005, 61007, 61008, 61010, 61012, 61013, 61015,
    61017, 61018, 61020, 61022, 61023, 61025, 61027, 61028,
    61030, 61032, 61033, 61035, 61037, 61038, 61040, 61042,
    61043, 61045, 61047, 61049, 61050, 61052, 61054, 61055,
    61057, 61059, 61060, 61062, 61064, 61065, 61067, 61069,
    61070, 61072, 61074, 61075, 61077, 61079, 61080, 61082,
    61084, 61085, 61087, 61089, 61090, 61092, 61094, 61095,
    61097, 61099, 61100, 61102, 61104, 61106, 61107, 61109,
    61111, 61112, 61114, 61116, 61117, 61119, 61121, 61122,
    61124, 61126, 61127, 61129, 61131, 61132, 61134, 61136,
    61137, 61139, 61141, 61142, 61144, 61146, 61147, 61149,
    61151, 61153, 61154, 61156, 61158, 61159, 61161, 61163,
    61164, 61166, 61168, 61169, 61171, 61173, 61174, 61176,
    61178, 61179, 61181, 61183, 61184, 61186, 61188, 61190,
    61191, 61193, 61195, 61196, 61198, 61200, 61201, 61203,
    61205, 61206, 61208, 61210, 61211, 61213, 61215, 61216,
    61218, 61220, 61221, 61223, 61225, 61227, 61228, 61230,
    61232, 61233, 61235, 61237, 61238, 61240, 61242, 61243,
    61245, 61247, 61248, 61250, 61252, 61253, 61255, 61257,
    61258, 61260, 61262, 61264, 61265, 61267, 61269, 61270,
    61272, 61274, 61275, 61277, 61279, 61280, 61282, 61284,
    61285, 61287, 61289, 61290, 61292, 61294, 61296, 61297,
    61299, 61301, 61302, 61304, 61306, 61307, 61309, 61311,
    61312, 61314, 61316, 61317, 61319, 61321, 61322, 61324,
    61326, 61328, 61329, 61331, 61333, 61334, 61336, 61338,
    61339, 61341, 61343, 61344, 61346, 61348, 61349, 61351,
    61353, 61355, 61356, 61358, 61360, 61361, 61363, 61365,
    61366, 61368, 61370, 61371, 61373, 61375, 61376, 61378,
    61380, 61382, 61383, 61385, 61387, 61388, 61390, 61392,
    61393, 61395, 61397, 61398, 61400, 61402, 61403, 61405,
    61407, 61409, 61410, 61412, 61414, 61415, 61417, 61419,
    61420, 61422, 61424, 61425, 61427, 61429, 61430, 61432,
    61434, 61436, 61437, 61439, 61441, 61442, 61444, 61446,
    61447, 61449, 61451, 61452, 61454, 61456, 61458, 61459,
    61461, 61463, 61464, 61466, 61468, 61469, 61471, 61473,
    61474, 61476, 61478, 61480, 61481, 61483, 61485, 61486,
    61488, 61490, 61491, 61493, 61495, 61496, 61498, 61500,
    61502, 61503, 61505, 61507, 61508, 61510, 61512, 61513,
    61515, 61517, 61518, 61520, 61522, 61524, 61525, 61527,
    61529, 61530, 61532, 61534, 61535, 61537, 61539, 61540,
    61542, 61544, 61546, 61547, 61549, 61551, 61552, 61554,
    61556, 61557, 61559, 61561, 61562, 61564, 61566, 61568,
    61569, 61571, 61573, 61574, 61576, 61578, 61579, 61581,
    61583, 61584, 61586, 61588, 61590, 61591, 61593, 61595,
    61596, 61598, 61600, 61601, 61603, 61605, 61607, 61608,
    61610, 61612, 61613, 61615, 61617, 61618, 61620, 61622,
    61623, 61625, 61627, 61629, 61630, 61632, 61634, 61635,
    61637, 61639, 61640, 61642, 61644, 61646, 61647, 61649,
    61651, 61652, 61654, 61656, 61657, 61659, 61661, 61663,
    61664, 61666, 61668, 61669, 61671, 61673, 61674, 61676,
    61678, 61679, 61681, 61683, 61685, 61686, 61688, 61690,
    61691, 61693, 61695, 61696, 61698, 61700, 61702, 61703,
    61705, 61707, 61708, 61710, 61712, 61713, 61715, 61717,
    61719, 61720, 61722, 61724, 61725, 61727, 61729, 61730,
    61732, 61734, 61736, 61737, 61739, 61741, 61742, 61744,
    61746, 61747, 61749, 61751, 61753, 61754, 61756, 61758,
    61759, 61761, 61763, 61764, 61766, 61768, 61770, 61771,
    61773, 61775, 61776, 61778, 61780, 61781, 61783, 61785,
    61787, 61788, 61790, 61792, 61793, 61795, 61797, 61799,
    61800, 61802, 61804, 61805, 61807, 61809, 61810, 61812,
    61814, 61816, 61817, 61819, 61821, 61822, 61824, 61826,
    61827, 61829, 61831, 61833, 61834, 61836, 61838, 61839,
    61841, 61843, 61844, 61846, 61848, 61850, 61851, 61853,
    61855, 61856, 61858, 61860, 61862, 61863, 61865, 61867,
    61868, 61870, 61872, 61873, 61875, 61877, 61879, 61880,
    61882, 61884, 61885, 61887, 61889, 61891, 61892, 61894,
    61896, 61897, 61899, 61901, 61902, 61904, 61906, 61908,
    61909, 61911, 61913, 61914, 61916, 61918, 61920, 61921,
    61923, 61925, 61926, 61928, 61930, 61931, 61933, 61935,
    61937, 61938, 61940, 61942, 61943, 61945, 61947, 61949,
    61950, 61952, 61954, 61955, 61957, 61959, 61961, 61962,
    61964, 61966, 61967, 61969, 61971, 61972, 61974, 61976,
    61978, 61979, 61981, 61983, 61984, 61986, 61988, 61990,
    61991, 61993, 61995, 61996, 61998, 62000, 62002, 62003,
    62005, 62007, 62008, 62010, 62012, 62014, 62015, 62017,
    62019, 62020, 62022, 62024, 62025, 62027, 62029, 62031,
    62032, 62034, 62036, 62037, 62039, 62041, 62043, 62044,
    62046, 62048, 62049, 62051, 62053, 62055, 62056, 62058,
    62060, 62061, 62063, 62065, 62067, 62068, 62070, 62072,
    62073, 62075, 62077, 62079, 62080, 62082, 62084, 62085,
    62087, 62089, 62091, 62092, 62094, 62096, 62097, 62099,
    62101, 62103, 62104, 62106, 62108, 62109, 62111, 62113,
    62115, 62116, 62118, 62120, 62121, 62123, 62125, 62127,
    62128, 62130, 62132, 62133, 62135, 62137, 62139, 62140,
    62142, 62144, 62145, 62147, 62149, 62151, 62152, 62154,
    62156, 62157, 62159, 62161, 62163, 62164, 62166, 62168,
    62169, 62171, 62173, 62175, 62176, 62178, 62180, 62181,
    62183, 62185, 62187, 62188, 62190, 62192, 62193, 62195,
    62197, 62199, 62200, 62202, 62204, 62205, 62207, 62209,
    62211, 62212, 62214, 62216, 62217, 62219, 62221, 62223,
    62224, 62226, 62228, 62229, 62231, 62233, 62235, 62236,
    62238, 62240, 62242, 62243, 62245, 62247, 62248, 62250,
    62252, 62254, 62255, 62257, 62259, 62260, 62262, 62264,
    62266, 62267, 62269, 62271, 62272, 62274, 62276, 62278,
    62279, 62281, 62283, 62284, 62286, 62288, 62290, 62291,
    62293, 62295, 62297, 62298, 62300, 62302, 62303, 62305,
    62307, 62309, 62310, 62312, 62314, 62315, 62317, 62319,
    62321, 62322, 62324, 62326, 62328, 62329, 62331, 62333,
    62334, 62336, 62338, 62340, 62341, 62343, 62345, 62346,
    62348, 62350, 62352, 62353, 62355, 62357, 62359, 62360,
    62362, 62364, 62365, 62367, 62369, 62371, 62372, 62374,
    62376, 62377, 62379, 62381, 62383, 62384, 62386, 62388,
    62390, 62391, 62393, 62395, 62396, 62398, 62400, 62402,
    62403, 62405, 62407, 62409, 62410, 62412, 62414, 62415,
    62417, 62419, 62421, 62422, 62424, 62426, 62427, 62429,
    62431, 62433, 62434, 62436, 62438, 62440, 62441, 62443,
    62445, 62446, 62448, 62450, 62452, 62453, 62455, 62457,
    62459, 62460, 62462, 62464, 62465, 62467, 62469, 62471,
    62472, 62474, 62476, 62478, 62479, 62481, 62483, 62484,
    62486, 62488, 62490, 62491, 62493, 62495, 62497, 62498,
    62500, 62502, 62503, 62505, 62507, 62509, 62510, 62512,
    62514, 62516, 62517, 62519, 62521, 62522, 62524, 62526,
    62528, 62529, 62531, 62533, 62535, 62536, 62538, 62540,
    62541, 62543, 62545, 62547, 62548, 62550, 62552, 62554,
    62555, 62557, 62559, 62561, 62562, 62564, 62566, 62567,
    62569, 62571, 62573, 62574, 62576, 62578, 62580, 62581,
    62583, 62585, 62586, 62588, 62590, 62592, 62593, 62595,
    62597, 62599, 62600, 62602, 62604, 62606, 62607, 62609,
    62611, 62612, 62614, 62616, 62618, 62619, 62621, 62623,
    62625, 62626, 62628, 62630, 62632, 62633, 62635, 62637,
    62638, 62640, 62642, 62644, 62645, 62647, 62649, 62651,
    62652, 62654, 62656, 62658, 62659, 62661, 62663, 62664,
    62666, 62668, 62670, 62671, 62673, 62675, 62677, 62678,
    62680, 62682, 62684, 62685, 62687, 62689, 62690, 62692,
    62694, 62696, 62697, 62699, 62701, 62703, 62704, 62706,
    62708, 62710, 62711, 62713, 62715, 62717, 62718, 62720,
    62722, 62723, 62725, 62727, 62729, 62730, 62732, 62734,
    62736, 62737, 62739, 62741, 62743, 62744, 62746, 62748,
    62750, 62751, 62753, 62755, 62756, 62758, 62760, 62762,
    62763, 62765, 62767, 62769, 62770, 62772, 62774, 62776,
    62777, 62779, 62781, 62783, 62784, 62786, 62788, 62789,
    62791, 62793, 62795, 62796, 62798, 62800, 62802, 62803,
    62805, 62807, 62809, 62810, 62812, 62814, 62816, 62817,
    62819, 62821, 62823, 62824, 62826, 62828, 62830, 62831,
    62833, 62835, 62836, 62838, 62840, 62842, 62843, 62845,
    62847, 62849, 62850, 62852, 62854, 62856, 62857, 62859,
    62861, 62863, 62864, 62866, 62868, 62870, 62871, 62873,
    62875, 62877, 62878, 62880, 62882, 62883, 62885, 62887,
    62889, 62890, 62892, 62894, 62896, 62897, 62899, 62901,
    62903, 62904, 62906, 62908, 62910, 62911, 62913, 62915,
    62917, 62918, 62920, 62922, 62924, 62925, 62927, 62929,
    62931, 62932, 62934, 62936, 62938, 62939, 62941, 62943,
    62945, 62946, 62948, 62950, 62951, 62953, 62955, 62957,
    62958, 62960, 62962, 62964, 62965, 62967, 62969, 62971,
    62972, 62974, 62976, 62978, 62979, 62981, 62983, 62985,
    62986, 62988, 62990, 62992, 62993, 62995, 62997, 62999,
    63000, 63002, 63004, 63006, 63007, 63009, 63011, 63013,
    63014, 63016, 63018, 63020, 63021, 63023, 63025, 63027,
    63028, 63030, 63032, 63034, 63035, 63037, 63039, 63041,
    63042, 63044, 63046, 63048, 63049, 63051, 63053, 63055,
    63056, 63058, 63060, 63062, 63063, 63065, 63067, 63069,
    63070, 63072, 63074, 63076, 63077, 63079, 63081, 63083,
    63084, 63086, 63088, 63090, 63091, 63093, 63095, 63097,
    63098, 63100, 63102, 63104, 63105, 63107, 63109, 63111,
    63112, 63114, 63116, 63118, 63119, 63121, 63123, 63125,
    63126, 63128, 63130, 63132, 63133, 63135, 63137, 63139,
    63140, 63142, 63144, 63146, 63147, 63149, 63151, 63153,
    63154, 63156, 63158, 63160, 63161, 63163, 63165, 63167,
    63168, 63170, 63172, 63174, 63175, 63177, 63179, 63181,
    63182, 63184, 63186, 63188, 63189, 63191, 63193, 63195,
    63196, 63198, 63200, 63202, 63203, 63205, 63207, 63209,
    63210, 63212, 63214, 63216, 63218, 63219, 63221, 63223,
    63225, 63226, 63228, 63230, 63232, 63233, 63235, 63237,
    63239, 63240, 63242, 63244, 63246, 63247, 63249, 63251,
    63253, 63254, 63256, 63258, 63260, 63261, 63263, 63265,
    63267, 63268, 63270, 63272, 63274, 63275, 63277, 63279,
    63281, 63283, 63284, 63286, 63288, 63290, 63291, 63293,
    63295, 63297, 63298, 63300, 63302, 63304, 63305, 63307,
    63309, 63311, 63312, 63314, 63316, 63318, 63319, 63321,
    63323, 63325, 63326, 63328, 63330, 63332, 63334, 63335,
    63337, 63339, 63341, 63342, 63344, 63346, 63348, 63349,
    63351, 63353, 63355, 63356, 63358, 63360, 63362, 63363,
    63365, 63367, 63369, 63370, 63372, 63374, 63376, 63378,
    63379, 63381, 63383, 63385, 63386, 63388, 63390, 63392,
    63393, 63395, 63397, 63399, 63400, 63402, 63404, 63406,
    63407, 63409, 63411, 63413, 63415, 63416, 63418, 63420,
    63422, 63423, 63425, 63427, 63429, 63430, 63432, 63434,
    63436, 63437, 63439, 63441, 63443, 63445, 63446, 63448,
    63450, 63452, 63453, 63455, 63457, 63459, 63460, 63462,
    63464, 63466, 63467, 63469, 63471, 63473, 63475, 63476,
    63478, 63480, 63482, 63483, 63485, 63487, 63489, 63490,
    63492, 63494, 63496, 63497, 63499, 63501, 63503, 63505,
    63506, 63508, 63510, 63512, 63513, 63515, 63517, 63519,
    63520, 63522, 63524, 63526, 63527, 63529, 63531, 63533,
    63535, 63536, 63538, 63540, 63542, 63543, 63545, 63547,
    63549, 63550, 63552, 63554, 63556, 63558, 63559, 63561,
    63563, 63565, 63566, 63568, 63570, 63572, 63573, 63575,
    63577, 63579, 63581, 63582, 63584, 63586, 63588, 63589,
    63591, 63593, 63595, 63596, 63598, 63600, 63602, 63604,
    63605, 63607, 63609, 63611, 63612, 63614, 63616, 63618,
    63619, 63621, 63623, 63625, 63627, 63628, 63630, 63632,
    63634, 63635, 63637, 63639, 63641, 63643, 63644, 63646,
    63648, 63650, 63651, 63653, 63655, 63657, 63658, 63660,
    63662, 63664, 63666, 63667, 63669, 63671, 63673, 63674,
    63676, 63678, 63680, 63682, 63683, 63685, 63687, 63689,
    63690, 63692, 63694, 63696, 63697, 63699, 63701, 63703,
    63705, 63706, 63708, 63710, 63712, 63713, 63715, 63717,
    63719, 63721, 63722, 63724, 63726, 63728, 63729, 63731,
    63733, 63735, 63737, 63738, 63740, 63742, 63744, 63745,
    63747, 63749, 63751, 63753, 63754, 63756, 63758, 63760,
    63761, 63763, 63765, 63767, 63768, 63770, 63772, 63774,
    63776, 63777, 63779, 63781, 63783, 63784, 63786, 63788,
    63790, 63792, 63793, 63795, 63797, 63799, 63800, 63802,
    63804, 63806, 63808, 63809, 63811, 63813, 63815, 63817,
    63818, 63820, 63822, 63824, 63825, 63827, 63829, 63831,
    63833, 63834, 63836, 63838, 63840, 63841, 63843, 63845,
    63847, 63849, 63850, 63852, 63854, 63856, 63857, 63859,
    63861, 63863, 63865, 63866, 63868, 63870, 63872, 63873,
    63875, 63877, 63879, 63881, 63882, 63884, 63886, 63888,
    63889, 63891, 63893, 63895, 63897, 63898, 63900, 63902,
    63904, 63906, 63907, 63909, 63911, 63913, 63914, 63916,
    63918, 63920, 63922, 63923, 63925, 63927, 63929, 63930,
    63932, 63934, 63936, 63938, 63939, 63941, 63943, 63945,
    63947, 63948, 63950, 63952, 63954, 63955, 63957, 63959,
    63961, 63963, 63964, 63966, 63968, 63970, 63972, 63973,
    63975, 63977, 63979, 63980, 63982, 63984, 63986, 63988,
    63989, 63991, 63993, 63995, 63997, 63998, 64000, 64002,
    64004, 64005, 64007, 64009, 64011, 64013, 64014, 64016,
    64018, 64020, 64022, 64023, 64025, 64027, 64029, 64030,
    64032, 64034, 64036, 64038, 64039, 64041, 64043, 64045,
    64047, 64048, 64050, 64052, 64054, 64055, 64057, 64059,
    64061, 64063, 64064, 64066, 64068, 64070, 64072, 64073,
    64075, 64077, 64079, 64081, 64082, 64084, 64086, 64088,
    64089, 64091, 64093, 64095, 64097, 64098, 64100, 64102,
    64104, 64106, 64107, 64109, 64111, 64113, 64115, 64116,
    64118, 64120, 64122, 64124, 64125, 64127, 64129, 64131,
    64132, 64134, 64136, 64138, 64140, 64141, 64143, 64145,
    64147, 64149, 64150, 64152, 64154, 64156, 64158, 64159,
    64161, 64163, 64165, 64167, 64168, 64170, 64172, 64174,
    64175, 64177, 64179, 64181, 64183, 64184, 64186, 64188,
    64190, 64192, 64193, 64195, 64197, 64199, 64201, 64202,
    64204, 64206, 64208, 64210, 64211, 64213, 64215, 64217,
    64219, 64220, 64222, 64224, 64226, 64228, 64229, 64231,
    64233, 64235, 64236, 64238, 64240, 64242, 64244, 64245,
    64247, 64249, 64251, 64253, 64254, 64256, 64258, 64260,
    64262, 64263, 64265, 64267, 64269, 64271, 64272, 64274,
    64276, 64278, 64280, 64281, 64283, 64285, 64287, 64289,
    64290, 64292, 64294, 64296, 64298, 64299, 64301, 64303,
    64305, 64307, 64308, 64310, 64312, 64314, 64316, 64317,
    64319, 64321, 64323, 64325, 64326, 64328, 64330, 64332,
    64334, 64335, 64337, 64339, 64341, 64343, 64344, 64346,
    64348, 64350, 64352, 64353, 64355, 64357, 64359, 64361,
    64362, 64364, 64366, 64368, 64370, 64371, 64373, 64375,
    64377, 64379, 64380, 64382, 64384, 64386, 64388, 64389,
    64391, 64393, 64395, 64397, 64398, 64400, 64402, 64404,
    64406, 64407, 64409, 64411, 64413, 64415, 64416, 64418,
    64420, 64422, 64424, 64425, 64427, 64429, 64431, 64433,
    64434, 64436, 64438, 64440, 64442, 64443, 64445, 64447,
    64449, 64451, 64453, 64454, 64456, 64458, 64460, 64462,
    64463, 64465, 64467, 64469, 64471, 64472, 64474, 64476,
    64478, 64480, 64481, 64483, 64485, 64487, 64489, 64490,
    64492, 64494, 64496, 64498, 64499, 64501, 64503, 64505,
    64507, 64508, 64510, 64512, 64514, 64516, 64518, 64519,
    64521, 64523, 64525, 64527, 64528, 64530, 64532, 64534,
    64536, 64537, 64539, 64541, 64543, 64545, 64546, 64548,
    64550, 64552, 64554, 64555, 64557, 64559, 64561, 64563,
    64565, 64566, 64568, 64570, 64572, 64574, 64575, 64577,
    64579, 64581, 64583, 64584, 64586, 64588, 64590, 64592,
    64594, 64595, 64597, 64599, 64601, 64603, 64604, 64606,
    64608, 64610, 64612, 64613, 64615, 64617, 64619, 64621,
    64622, 64624, 64626, 64628, 64630, 64632, 64633, 64635,
    64637, 64639, 64641, 64642, 64644, 64646, 64648, 64650,
    64651, 64653, 64655, 64657, 64659, 64661, 64662, 64664,
    64666, 64668, 64670, 64671, 64673, 64675, 64677, 64679,
    64680, 64682, 64684, 64686, 64688, 64690, 64691, 64693,
    64695, 64697, 64699, 64700, 64702, 64704, 64706, 64708,
    64710, 64711, 64713, 64715, 64717, 64719, 64720, 64722,
    64724, 64726, 64728, 64730, 64731, 64733, 64735, 64737,
    64739, 64740, 64742, 64744, 64746, 64748, 64749, 64751,
    64753, 64755, 64757, 64759, 64760, 64762, 64764, 64766,
    64768, 64769, 64771, 64773, 64775, 64777, 64779, 64780,
    64782, 64784, 64786, 64788, 64789, 64791, 64793, 64795,
    64797, 64799, 64800, 64802, 64804, 64806, 64808, 64809,
    64811, 64813, 64815, 64817, 64819, 64820, 64822, 64824,
    64826, 64828, 64830, 64831, 64833, 64835, 64837, 64839,
    64840, 64842, 64844, 64846, 64848, 64850, 64851, 64853,
    64855, 64857, 64859, 64860, 64862, 64864, 64866, 64868,
    64870, 64871, 64873, 64875, 64877, 64879, 64881, 64882,
    64884, 64886, 64888, 64890, 64891, 64893, 64895, 64897,
    64899, 64901, 64902, 64904, 64906, 64908, 64910, 64912,
    64913, 64915, 64917, 64919, 64921, 64922, 64924, 64926,
    64928, 64930, 64932, 64933, 64935, 64937, 64939, 64941,
    64943, 64944, 64946, 64948, 64950, 64952, 64953, 64955,
    64957, 64959, 64961, 64963, 64964, 64966, 64968, 64970,
    64972, 64974, 64975, 64977, 64979, 64981, 64983, 64985,
    64986, 64988, 64990, 64992, 64994, 64995, 64997, 64999,
    65001, 65003, 65005, 65006, 65008, 65010, 65012, 65014,
    65016, 65017, 65019, 65021, 65023, 65025, 65027, 65028,
    65030, 65032, 65034, 65036, 65038, 65039, 65041, 65043,
    65045, 65047, 65049, 65050, 65052, 65054, 65056, 65058,
    65059, 65061, 65063, 65065, 65067, 65069, 65070, 65072,
    65074, 65076, 65078, 65080, 65081, 65083, 65085, 65087,
    65089, 65091, 65092, 65094, 65096, 65098, 65100, 65102,
    65103, 65105, 65107, 65109, 65111, 65113, 65114, 65116,
    65118, 65120, 65122, 65124, 65125, 65127, 65129, 65131,
    65133, 65135, 65136, 65138, 65140, 65142, 65144, 65146,
    65147, 65149, 65151, 65153, 65155, 65157, 65158, 65160,
    65162, 65164, 65166, 65168, 65169, 65171, 65173, 65175,
    65177, 65179, 65180, 65182, 65184, 65186, 65188, 65190,
    65191, 65193, 65195, 65197, 65199, 65201, 65202, 65204,
    65206, 65208, 65210, 65212, 65213, 65215, 65217, 65219,
    65221, 65223, 65225, 65226, 65228, 65230, 65232, 65234,
    65236, 65237, 65239, 65241, 65243, 65245, 65247, 65248,
    65250, 65252, 65254, 65256, 65258, 65259, 65261, 65263,
    65265, 65267, 65269, 65270, 65272, 65274, 65276, 65278,
    65280, 65282, 65283, 65285, 65287, 65289, 65291, 65293,
    65294, 65296, 65298, 65300, 65302, 65304, 65305, 65307,
    65309, 65311, 65313, 65315, 65316, 65318, 65320, 65322,
    65324, 65326, 65328, 65329, 65331, 65333, 65335, 65337,
    65339, 65340, 65342, 65344, 65346, 65348, 65350, 65351,
    65353, 65355, 65357, 65359, 65361, 65363, 65364, 65366,
    65368, 65370, 65372, 65374, 65375, 65377, 65379, 65381,
    65383, 65385, 65387, 65388, 65390, 65392, 65394, 65396,
    65398, 65399, 65401, 65403, 65405, 65407, 65409, 65410,
    65412, 65414, 65416, 65418, 65420, 65422, 65423, 65425,
    65427, 65429, 65431, 65433, 65434, 65436, 65438, 65440,
    65442, 65444, 65446, 65447, 65449, 65451, 65453, 65455,
    65457, 65458, 65460, 65462, 65464, 65466, 65468, 65470,
    65471, 65473, 65475, 65477, 65479, 65481, 65483, 65484,
    65486, 65488, 65490, 65492, 65494, 65495, 65497, 65499,
    65501, 65503, 65505, 65507, 65508, 65510, 65512, 65514,
    65516, 65518, 65520, 65521, 65523, 65525, 65527, 65529,
    65531, 65532, 65534, 65536, 65538, 65540, 65542, 65544,
    65545, 65547, 65549, 65551, 65553, 65555, 65557, 65558,
    65560, 65562, 65564, 65566, 65568, 65569, 65571, 65573,
    65575, 65577, 65579, 65581, 65582, 65584, 65586, 65588,
    65590, 65592, 65594, 65595, 65597, 65599, 65601, 65603,
    65605, 65607, 65608, 65610, 65612, 65614, 65616, 65618,
    65620, 65621, 65623, 65625, 65627, 65629, 65631, 65633,
    65634, 65636, 65638, 65640, 65642, 65644, 65646, 65647,
    65649, 65651, 65653, 65655, 65657, 65658, 65660, 65662,
    65664, 65666, 65668, 65670, 65671, 65673, 65675, 65677,
    65679, 65681, 65683, 65684, 65686, 65688, 65690, 65692,
    65694, 65696, 65697, 65699, 65701, 65703, 65705, 65707,
    65709, 65711, 65712, 65714, 65716, 65718, 65720, 65722,
    65724, 65725, 65727, 65729, 65731, 65733, 65735, 65737,
    65738, 65740, 65742, 65744, 65746, 65748, 65750, 65751,
    65753, 65755, 65757, 65759, 65761, 65763, 65764, 65766,
    65768, 65770, 65772, 65774, 65776, 65777, 65779, 65781,
    65783, 65785, 65787, 65789, 65790, 65792, 65794, 65796,
    65798, 65800, 65802, 65804, 65805, 65807, 65809, 65811,
    65813, 65815, 65817, 65818, 65820, 65822, 65824, 65826,
    65828, 65830, 65831, 65833, 65835, 65837, 65839, 65841,
    65843, 65845, 65846, 65848, 65850, 65852, 65854, 65856,
    65858, 65859, 65861, 65863, 65865, 65867, 65869, 65871,
    65873, 65874, 65876, 65878, 65880, 65882, 65884, 65886,
    65887, 65889, 65891, 65893, 65895, 65897, 65899, 65901,
    65902, 65904, 65906, 65908, 65910, 65912, 65914, 65915,
    65917, 65919, 65921, 65923, 65925, 65927, 65929, 65930,
    65932, 65934, 65936, 65938, 65940, 65942, 65943, 65945,
    65947, 65949, 65951, 65953, 65955, 65957, 65958, 65960,
    65962, 65964, 65966, 65968, 65970, 65972, 65973, 65975,
    65977, 65979, 65981, 65983, 65985, 65986, 65988, 65990,
    65992, 65994, 65996, 65998, 66000, 66001, 66003, 66005,
    66007, 66009, 66011, 66013, 66015, 66016, 66018, 66020,
    66022, 66024, 66026, 66028, 66030, 66031, 66033, 66035,
    66037, 66039, 66041, 66043, 66045, 66046, 66048, 66050,
    66052, 66054, 66056, 66058, 66060, 66061, 66063, 66065,
    66067, 66069, 66071, 66073, 66075, 66076, 66078, 66080,
    66082, 66084, 66086, 66088, 66090, 66091, 66093, 66095,
    66097, 66099, 66101, 66103, 66105, 66106, 66108, 66110,
    66112, 66114, 66116, 66118, 66120, 66121, 66123, 66125,
    66127, 66129, 66131, 66133, 66135, 66136, 66138, 66140,
    66142, 66144, 66146, 66148, 66150, 66151, 66153, 66155,
    66157, 66159, 66161, 66163, 66165, 66166, 66168, 66170,
    66172, 66174, 66176, 66178, 66180, 66182, 66183, 66185,
    66187, 66189, 66191, 66193, 66195, 66197, 66198, 66200,
    66202, 66204, 66206, 66208, 66210, 66212, 66213, 66215,
    66217, 66219, 66221, 66223, 66225, 66227, 66229, 66230,
    66232, 66234, 66236, 66238, 66240, 66242, 66244, 66245,
    66247, 66249, 66251, 66253, 66255, 66257, 66259, 66261,
    66262, 66264, 66266, 66268, 66270, 66272, 66274, 66276,
    66277, 66279, 66281, 66283, 66285, 66287, 66289, 66291,
    66293, 66294, 66296, 66298, 66300, 66302, 66304, 66306,
    66308, 66310, 66311, 66313, 66315, 66317, 66319, 66321,
    66323, 66325, 66327, 66328, 66330, 66332, 66334, 66336,
    66338, 66340, 66342, 66343, 66345, 66347, 66349, 66351,
    66353, 66355, 66357, 66359, 66360, 66362, 66364, 66366,
    66368, 66370, 66372, 66374, 66376, 66377, 66379, 66381,
    66383, 66385, 66387, 66389, 66391, 66393, 66394, 66396,
    66398, 66400, 66402, 66404, 66406, 66408, 66410, 66411,
    66413, 66415, 66417, 66419, 66421, 66423, 66425, 66427,
    66429, 66430, 66432, 66434, 66436, 66438, 66440, 66442,
    66444, 66446, 66447, 66449, 66451, 66453, 66455, 66457,
    66459, 66461, 66463, 66464, 66466, 66468, 66470, 66472,
    66474, 66476, 66478, 66480, 66481, 66483, 66485, 66487,
    66489, 66491, 66493, 66495, 66497, 66499, 66500, 66502,
    66504, 66506, 66508, 66510, 66512, 66514, 66516, 66517,
    66519, 66521, 66523, 66525, 66527, 66529, 66531, 66533,
    66535, 66536, 66538, 66540, 66542, 66544, 66546, 66548,
    66550, 66552, 66554, 66555, 66557, 66559, 66561, 66563,
    66565, 66567, 66569, 66571, 66572, 66574, 66576, 66578,
    66580, 66582, 66584, 66586, 66588, 66590, 66591, 66593,
    66595, 66597, 66599, 66601, 66603, 66605, 66607, 66609,
    66610, 66612, 66614, 66616, 66618, 66620, 66622, 66624,
    66626, 66628, 66629, 66631, 66633, 66635, 66637, 66639,
    66641, 66643, 66645, 66647, 66648, 66650, 66652, 66654,
    66656, 66658, 66660, 66662, 66664, 66666, 66667, 66669,
    66671, 66673, 66675, 66677, 66679, 66681, 66683, 66685,
    66687, 66688, 66690, 66692, 66694, 66696, 66698, 66700,
    66702, 66704, 66706, 66707, 66709, 66711, 66713, 66715,
    66717, 66719, 66721, 66723, 66725, 66726, 66728, 66730,
    66732, 66734, 66736, 66738, 66740, 66742, 66744, 66746,
    66747, 66749, 66751, 66753, 66755, 66757, 66759, 66761,
    66763, 66765, 66767, 66768, 66770, 66772, 66774, 66776,
    66778, 66780, 66782, 66784, 66786, 66788, 66789, 66791,
    66793, 66795, 66797, 66799, 66801, 66803, 66805, 66807,
    66808, 66810, 66812, 66814, 66816, 66818, 66820, 66822,
    66824, 66826, 66828, 66830, 66831, 66833, 66835, 66837,
    66839, 66841, 66843, 66845, 66847, 66849, 66851, 66852,
    66854, 66856, 66858, 66860, 66862, 66864, 66866, 66868,
    66870, 66872, 66873, 66875, 66877, 66879, 66881, 66883,
    66885, 66887, 66889, 66891, 66893, 66894, 66896, 66898,
    66900, 66902, 66904, 66906, 66908, 66910, 66912, 66914,
    66916, 66917, 66919, 66921, 66923, 66925, 66927, 66929,
    66931, 66933, 66935, 66937, 66939, 66940, 66942, 66944,
    66946, 66948, 66950, 66952, 66954, 66956, 66958, 66960,
    66962, 66963, 66965, 66967, 66969, 66971, 66973, 66975,
    66977, 66979, 66981, 66983, 66985, 66986, 66988, 66990,
    66992, 66994, 66996, 66998, 67000, 67002, 67004, 67006,
    67008, 67009, 67011, 67013, 67015, 67017, 67019, 67021,
    67023, 67025, 67027, 67029, 67031, 67032, 67034, 67036,
    67038, 67040, 67042, 67044, 67046, 67048, 67050, 67052,
    67054, 67056, 67057, 67059, 67061, 67063, 67065, 67067,
    67069, 67071, 67073, 67075, 67077, 67079, 67080, 67082,
    67084, 67086, 67088, 67090, 67092, 67094, 67096, 67098,
    67100, 67102, 67104, 67105, 67107, 67109, 67111, 67113,
    67115, 67117, 67119, 67121, 67123, 67125, 67127, 67129,
    67130, 67132, 67134, 67136, 67138, 67140, 67142, 67144,
    67146, 67148, 67150, 67152, 67154, 67156, 67157, 67159,
    67161, 67163, 67165, 67167, 67169, 67171, 67173, 67175,
    67177, 67179, 67181, 67182, 67184, 67186, 67188, 67190,
    67192, 67194, 67196, 67198, 67200, 67202, 67204, 67206,
    67208, 67209, 67211, 67213, 67215, 67217, 67219, 67221,
    67223, 67225, 67227, 67229, 67231, 67233, 67235, 67236,
    67238, 67240, 67242, 67244, 67246, 67248, 67250, 67252,
    67254, 67256, 67258, 67260, 67262, 67263, 67265, 67267,
    67269, 67271, 67273, 67275, 67277, 67279, 67281, 67283,
    67285, 67287, 67289, 67291, 67292, 67294, 67296, 67298,
    67300, 67302, 67304, 67306, 67308, 67310, 67312, 67314,
    67316, 67318, 67320, 67321, 67323, 67325, 67327, 67329,
    67331, 67333, 67335, 67337, 67339, 67341, 67343, 67345,
    67347, 67349, 67350, 67352, 67354, 67356, 67358, 67360,
    67362, 67364, 67366, 67368, 67370, 67372, 67374, 67376,
    67378, 67379, 67381, 67383, 67385, 67387, 67389, 67391,
    67393, 67395, 67397, 67399, 67401, 67403, 67405, 67407,
    67409, 67410, 67412, 67414, 67416, 67418, 67420, 67422,
    67424, 67426, 67428, 67430, 67432, 67434, 67436, 67438,
    67440, 67442, 67443, 67445, 67447, 67449, 67451, 67453,
    67455, 67457, 67459, 67461, 67463, 67465, 67467, 67469,
    67471, 67473, 67474, 67476, 67478, 67480, 67482, 67484,
    67486, 67488, 67490, 67492, 67494, 67496, 67498, 67500,
    67502, 67504, 67506, 67508, 67509, 67511, 67513, 67515,
    67517, 67519, 67521, 67523, 67525, 67527, 67529, 67531,
    67533, 67535, 67537, 67539, 67541, 67542, 67544, 67546,
    67548, 67550, 67552, 67554, 67556, 67558, 67560, 67562,
    67564, 67566, 67568, 67570, 67572, 67574, 67576, 67578,
    67579, 67581, 67583, 67585, 67587, 67589, 67591, 67593,
    67595, 67597, 67599, 67601, 67603, 67605, 67607, 67609,
    67611, 67613, 67615, 67616, 67618, 67620, 67622, 67624,
    67626, 67628, 67630, 67632, 67634, 67636, 67638, 67640,
    67642, 67644, 67646, 67648, 67650, 67652, 67653, 67655,
    67657, 67659, 67661, 67663, 67665, 67667, 67669, 67671,
    67673, 67675, 67677, 67679, 67681, 67683, 67685, 67687,
    67689, 67691, 67693, 67694, 67696, 67698, 67700, 67702,
    67704, 67706, 67708, 67710, 67712, 67714, 67716, 67718,
    67720, 67722, 67724, 67726, 67728, 67730, 67732, 67734,
    67735, 67737, 67739, 67741, 67743, 67745, 67747, 67749,
    67751, 67753, 67755, 67757, 67759, 67761, 67763, 67765,
    67767, 67769, 67771, 67773, 67775, 67777, 67778, 67780,
    67782, 67784, 67786, 67788, 67790, 67792, 67794, 67796,
    67798, 67800, 67802, 67804, 67806, 67808, 67810, 67812,
    67814, 67816, 67818, 67820, 67822, 67824, 67825, 67827,
    67829, 67831, 67833, 67835, 67837, 67839, 67841, 67843,
    67845, 67847, 67849, 67851, 67853, 67855, 67857, 67859,
    67861, 67863, 67865, 67867, 67869, 67871, 67872, 67874,
    67876, 67878, 67880, 67882, 67884, 67886, 67888, 67890,
    67892, 67894, 67896, 67898, 67900, 67902, 67904, 67906,
    67908, 67910, 67912, 67914, 67916, 67918, 67920, 67922,
    67924, 67925, 67927, 67929, 67931, 67933, 67935, 67937,
    67939, 67941, 67943, 67945, 67947, 67949, 67951, 67953,
    67955, 67957, 67959, 67961, 67963, 67965, 67967, 67969,
    67971, 67973, 67975, 67977, 67979, 67980, 67982, 67984,
    67986, 67988, 67990, 67992, 67994, 67996, 67998, 68000,
    68002, 68004, 68006, 68008, 68010, 68012, 68014, 68016,
    68018, 68020, 68022, 68024, 68026, 68028, 68030, 68032,
    68034, 68036, 68038, 68040, 68042, 68043, 68045, 68047,
    68049, 68051, 68053, 68055, 68057, 68059, 68061, 68063,
    68065, 68067, 68069, 68071, 68073, 68075, 68077, 68079,
    68081, 68083, 68085, 68087, 68089, 68091, 68093, 68095,
    68097, 68099, 68101, 68103, 68105, 68107, 68109, 68110,
    68112, 68114, 68116, 68118, 68120, 68122, 68124, 68126,
    68128, 68130, 68132, 68134, 68136, 68138, 68140, 68142,
    68144, 68146, 68148, 68150, 68152, 68154, 68156, 68158,
    68160, 68162, 68164, 68166, 68168, 68170, 68172, 68174,
    68176, 68178, 68180, 68182, 68184, 68186, 68188, 68190,
    68191, 68193, 68195, 68197, 68199, 68201, 68203, 68205,
    68207, 68209, 68211, 68213, 68215, 68217, 68219, 68221,
    68223, 68225, 68227, 68229, 68231, 68233, 68235, 68237,
    68239, 68241, 68243, 68245, 68247, 68249, 68251, 68253,
    68255, 68257, 68259, 68261, 68263, 68265, 68267, 68269,
    68271, 68273, 68275, 68277, 68279, 68281, 68283, 68285,
    68287, 68288, 68290, 68292, 68294, 68296, 68298, 68300,
    68302, 68304, 68306, 68308, 68310, 68312, 68314, 68316,
    68318, 68320, 68322, 68324, 68326, 68328, 68330, 68332,
    68334, 68336, 68338, 68340, 68342, 68344, 68346, 68348,
    68350, 68352, 68354, 68356, 68358, 68360, 68362, 68364,
    68366, 68368, 68370, 68372, 68374, 68376, 68378, 68380,
    68382, 68384, 68386, 68388, 68390, 68392, 68394, 68396,
    68398, 68400, 68402, 68404, 68406, 68408, 68410, 68412,
    68414, 68416, 68418, 68420, 68422, 68424, 68426, 68427,
    68429, 68431, 68433, 68435, 68437, 68439, 68441, 68443,
    68445, 68447, 68449, 68451, 68453, 68455, 68457, 68459,
    68461, 68463, 68465, 68467, 68469, 68471, 68473, 68475,
    68477, 68479, 68481, 68483, 68485, 68487, 68489, 68491,
    68493, 68495, 68497, 68499, 68501, 68503, 68505, 68507,
    68509, 68511, 68513, 68515, 68517, 68519, 68521, 68523,
    68525, 68527, 68529, 68531, 68533, 68535, 68537, 68539,
    68541, 68543, 68545, 68547, 68549, 68551, 68553, 68555,
    68557, 68559, 68561, 68563, 68565, 68567, 68569, 68571,
    68573, 68575, 68577, 68579, 68581, 68583, 68585, 68587,
    68589, 68591, 68593, 68595, 68597, 68599, 68601, 68603,
    68605, 68607, 68609, 68611, 68613, 68615, 68617, 68619,
    68621, 68623, 68625, 68627, 68629, 68631, 68633, 68635,
    68637, 68639, 68641, 68643, 68645, 68647, 68649, 68651,
    68653, 68655, 68657, 68659, 68661, 68663, 68665, 68667,
    68669, 68671, 68673, 68675, 68677, 68679, 68681, 68683,
    68685, 68687, 68689, 68691, 68693, 68695, 68697, 68699,
    68701, 68703, 68705, 68707, 68709, 68711, 68713, 68715,
    68717, 68719, 68721, 68723, 68725, 68727, 68729, 68731,
    68733, 68735, 68737, 68739, 68741, 68743, 68745, 68747,
    68749, 68751, 68753, 68755, 68757, 68759, 68761, 68763,
    68765, 68767, 68769, 68771, 68773, 68775, 68777, 68779,
    68781, 68783, 68785, 68787, 68789, 68791, 68793, 68795,
    68797, 68799, 68801, 68803, 68805, 68807, 68809, 68811,
    68813, 68815, 68817, 68819, 68821, 68823, 68825, 68827,
    68829, 68832, 68834, 68836, 68838, 68840, 68842, 68844,
    68846, 68848, 68850, 68852, 68854, 68856, 68858, 68860,
    68862, 68864, 68866, 68868, 68870, 68872, 68874, 68876,
    68878, 68880, 68882, 68884, 68886, 68888, 68890, 68892,
    68894, 68896, 68898, 68900, 68902, 68904, 68906, 68908,
    68910, 68912, 68914, 68916, 68918, 68920, 68922, 68924,
    68926, 68928, 68930, 68932, 68934, 68936, 68938, 68940,
    68942, 68944, 68946, 68948, 68950, 68952, 68954, 68956,
    68958, 68960, 68962, 68964, 68966, 68968, 68971, 68973,
    68975, 68977, 68979, 68981, 68983, 68985, 68987, 68989,
    68991, 68993, 68995, 68997, 68999, 69001, 69003, 69005,
    69007, 69009, 69011, 69013, 69015, 69017, 69019, 69021,
    69023, 69025, 69027, 69029, 69031, 69033, 69035, 69037,
    69039, 69041, 69043, 69045, 69047, 69049, 69051, 69053,
    69055, 69057, 69059, 69061, 69063, 69065, 69068, 69070,
    69072, 69074, 69076, 69078, 69080, 69082, 69084, 69086,
    69088, 69090, 69092, 69094, 69096, 69098, 69100, 69102,
    69104, 69106, 69108, 69110, 69112, 69114, 69116, 69118,
    69120, 69122, 69124, 69126, 69128, 69130, 69132, 69134,
    69136, 69138, 69140, 69142, 69144, 69147, 69149, 69151,
    69153, 69155, 69157, 69159, 69161, 69163, 69165, 69167,
    69169, 69171, 69173, 69175, 69177, 69179, 69181, 69183,
    69185, 69187, 69189, 69191, 69193, 69195, 69197, 69199,
    69201, 69203, 69205, 69207, 69209, 69211, 69213, 69216,
    69218, 69220, 69222, 69224, 69226, 69228, 69230, 69232,
    69234, 69236, 69238, 69240, 69242, 69244, 69246, 69248,
    69250, 69252, 69254, 69256, 69258, 69260, 69262, 69264,
    69266, 69268, 69270, 69272, 69274, 69277, 69279, 69281,
    69283, 69285, 69287, 69289, 69291, 69293, 69295, 69297,
    69299, 69301, 69303, 69305, 69307, 69309, 69311, 69313,
    69315, 69317, 69319, 69321, 69323, 69325, 69327, 69329,
    69331, 69334, 69336, 69338, 69340, 69342, 69344, 69346,
    69348, 69350, 69352, 69354, 69356, 69358, 69360, 69362,
    69364, 69366, 69368, 69370, 69372, 69374, 69376, 69378,
    69380, 69382, 69385, 69387, 69389, 69391, 69393, 69395,
    69397, 69399, 69401, 69403, 69405, 69407, 69409, 69411,
    69413, 69415, 69417, 69419, 69421, 69423, 69425, 69427,
    69429, 69431, 69434, 69436, 69438, 69440, 69442, 69444,
    69446, 69448, 69450, 69452, 69454, 69456, 69458, 69460,
    69462, 69464, 69466, 69468, 69470, 69472, 69474, 69476,
    69479, 69481, 69483, 69485, 69487, 69489, 69491, 69493,
    69495, 69497, 69499, 69501, 69503, 69505, 69507, 69509,
    69511, 69513, 69515, 69517, 69519, 69522, 69524, 69526,
    69528, 69530, 69532, 69534, 69536, 69538, 69540, 69542,
    69544, 69546, 69548, 69550, 69552, 69554, 69556, 69558,
    69560, 69563, 69565, 69567, 69569, 69571, 69573, 69575,
    69577, 69579, 69581, 69583, 69585, 69587, 69589, 69591,
    69593, 69595, 69597, 69599, 69601, 69604, 69606, 69608,
    69610, 69612, 69614, 69616, 69618, 69620, 69622, 69624,
    69626, 69628, 69630, 69632, 69634, 69636, 69638, 69641,
    69643, 69645, 69647, 69649, 69651, 69653, 69655, 69657,
    69659, 69661, 69663, 69665, 69667, 69669, 69671, 69673,
    69675, 69678, 69680, 69682, 69684, 69686, 69688, 69690,
    69692, 69694, 69696, 69698, 69700, 69702, 69704, 69706,
    69708, 69710, 69713, 69715, 69717, 69719, 69721, 69723,
    69725, 69727, 69729, 69731, 69733, 69735, 69737, 69739,
    69741, 69743, 69745, 69748, 69750, 69752, 69754, 69756,
    69758, 69760, 69762, 69764, 69766, 69768, 69770, 69772,
    69774, 69776, 69778, 69781, 69783, 69785, 69787, 69789,
    69791, 69793, 69795, 69797, 69799, 69801, 69803, 69805,
    69807, 69809, 69812, 69814, 69816, 69818, 69820, 69822,
    69824, 69826, 69828, 69830, 69832, 69834, 69836, 69838,
    69840, 69842, 69845, 69847, 69849, 69851, 69853, 69855,
    69857, 69859, 69861, 69863, 69865, 69867, 69869, 69871,
    69874, 69876, 69878, 69880, 69882, 69884, 69886, 69888,
    69890, 69892, 69894, 69896, 69898, 69900, 69902, 69905,
    69907, 69909, 69911, 69913, 69915, 69917, 69919, 69921,
    69923, 69925, 69927, 69929, 69931, 69934, 69936, 69938,
    69940, 69942, 69944, 69946, 69948, 69950, 69952, 69954,
    69956, 69958, 69960, 69963, 69965, 69967, 69969, 69971,
    69973, 69975, 69977, 69979, 69981, 69983, 69985, 69987,
    69990, 69992, 69994, 69996, 69998, 70000, 70002, 70004,
    70006, 70008, 70010, 70012, 70014, 70017, 70019, 70021,
    70023, 70025, 70027, 70029, 70031, 70033, 70035, 70037,
    70039, 70041, 70044, 70046, 70048, 70050, 70052, 70054,
    70056, 70058, 70060, 70062, 70064, 70066, 70068, 70071,
    70073, 70075, 70077, 70079, 70081, 70083, 70085, 70087,
    70089, 70091, 70093, 70096, 70098, 70100, 70102, 70104,
    70106, 70108, 70110, 70112, 70114, 70116, 70118, 70120,
    70123, 70125, 70127, 70129, 70131, 70133, 70135, 70137,
    70139, 70141, 70143, 70145, 70148, 70150, 70152, 70154,
    70156, 70158, 70160, 70162, 70164, 70166, 70168, 70171,
    70173, 70175, 70177, 70179, 70181, 70183, 70185, 70187,
    70189, 70191, 70193, 70196, 70198, 70200, 70202, 70204,
    70206, 70208, 70210, 70212, 70214, 70216, 70219, 70221,
    70223, 70225, 70227, 70229, 70231, 70233, 70235, 70237,
    70239, 70241, 70244, 70246, 70248, 70250, 70252, 70254,
    70256, 70258, 70260, 70262, 70264, 70267, 70269, 70271,
    70273, 70275, 70277, 70279, 70281, 70283, 70285, 70287,
    70290, 70292, 70294, 70296, 70298, 70300, 70302, 70304,
    70306, 70308, 70311, 70313, 70315, 70317, 70319, 70321,
    70323, 70325, 70327, 70329, 70331, 70334, 70336, 70338,
    70340, 70342, 70344, 70346, 70348, 70350, 70352, 70355,
    70357, 70359, 70361, 70363, 70365, 70367, 70369, 70371,
    70373, 70375, 70378, 70380, 70382, 70384, 70386, 70388,
    70390, 70392, 70394, 70396, 70399, 70401, 70403, 70405,
    70407, 70409, 70411, 70413, 70415, 70417, 70420, 70422,
    70424, 70426, 70428, 70430, 70432, 70434, 70436, 70438,
    70441, 70443, 70445, 70447, 70449, 70451, 70453, 70455,
    70457, 70459, 70462, 70464, 70466, 70468, 70470, 70472,
    70474, 70476, 70478, 70481, 70483, 70485, 70487, 70489,
    70491, 70493, 70495, 70497, 70499, 70502, 70504, 70506,
    70508, 70510, 70512, 70514, 70516, 70518, 70521, 70523,
    70525, 70527, 70529, 70531, 70533, 70535, 70537, 70539,
    70542, 70544, 70546, 70548, 70550, 70552, 70554, 70556,
    70558, 70561, 70563, 70565, 70567, 70569, 70571, 70573,
    70575, 70577, 70580, 70582, 70584, 70586, 70588, 70590,
    70592, 70594, 70596, 70599, 70601, 70603, 70605, 70607,
    70609, 70611, 70613, 70615, 70618, 70620, 70622, 70624,
    70626, 70628, 70630, 70632, 70634, 70637, 70639, 70641,
    70643, 70645, 70647, 70649, 70651, 70653, 70656, 70658,
    70660, 70662, 70664, 70666, 70668, 70670, 70672, 70675,
    70677, 70679, 70681, 70683, 70685, 70687, 70689, 70692,
    70694, 70696, 70698, 70700, 70702, 70704, 70706, 70708,
    70711, 70713, 70715, 70717, 70719, 70721, 70723, 70725,
    70728, 70730, 70732, 70734, 70736, 70738, 70740, 70742,
    70744, 70747, 70749, 70751, 70753, 70755, 70757, 70759,
    70761, 70764, 70766, 70768, 70770, 70772, 70774, 70776,
    70778, 70781, 70783, 70785, 70787, 70789, 70791, 70793,
    70795, 70798, 70800, 70802, 70804, 70806, 70808, 70810,
    70812, 70814, 70817, 70819, 70821, 70823, 70825, 70827,
    70829, 70831, 70834, 70836, 70838, 70840, 70842, 70844,
    70846, 70848, 70851, 70853, 70855, 70857, 70859, 70861,
    70863, 70866, 70868, 70870, 70872, 70874, 70876, 70878,
    70880, 70883, 70885, 70887, 70889, 70891, 70893, 70895,
    70897, 70900, 70902, 70904, 70906, 70908, 70910, 70912,
    70914, 70917, 70919, 70921, 70923, 70925, 70927, 70929,
    70932, 70934, 70936, 70938, 70940, 70942, 70944, 70946,
    70949, 70951, 70953, 70955, 70957, 70959, 70961, 70963,
    70966, 70968, 70970, 70972, 70974, 70976, 70978, 70981,
    70983, 70985, 70987, 70989, 70991, 70993, 70995, 70998,
    71000, 71002, 71004, 71006, 71008, 71010, 71013, 71015,
    71017, 71019, 71021, 71023, 71025, 71028, 71030, 71032,
    71034, 71036, 71038, 71040, 71042, 71045, 71047, 71049,
    71051, 71053, 71055, 71057, 71060, 71062, 71064, 71066,
    71068, 71070, 71072, 71075, 71077, 71079, 71081, 71083,
    71085, 71087, 71090, 71092, 71094, 71096, 71098, 71100,
    71102, 71105, 71107, 71109, 71111, 71113, 71115, 71117,
    71120, 71122, 71124, 71126, 71128, 71130, 71132, 71135,
    71137, 71139, 71141, 71143, 71145, 71147, 71150, 71152,
    71154, 71156, 71158, 71160, 71162, 71165, 71167, 71169,
    71171, 71173, 71175, 71177, 71180, 71182, 71184, 71186,
    71188, 71190, 71192, 71195, 71197, 71199, 71201, 71203,
    71205, 71207, 71210, 71212, 71214, 71216, 71218, 71220,
    71223, 71225, 71227, 71229, 71231, 71233, 71235, 71238,
    71240, 71242, 71244, 71246, 71248, 71250, 71253, 71255,
    71257, 71259, 71261, 71263, 71266, 71268, 71270, 71272,
    71274, 71276, 71278, 71281, 71283, 71285, 71287, 71289,
    71291, 71294, 71296, 71298, 71300, 71302, 71304, 71306,
    71309, 71311, 71313, 71315, 71317, 71319, 71322, 71324,
    71326, 71328, 71330, 71332, 71334, 71337, 71339, 71341,
    71343, 71345, 71347, 71350, 71352, 71354, 71356, 71358,
    71360, 71363, 71365, 71367, 71369, 71371, 71373, 71375,
    71378, 71380, 71382, 71384, 71386, 71388, 71391, 71393,
    71395, 71397, 71399, 71401, 71404, 71406, 71408, 71410,
    71412, 71414, 71416, 71419, 71421, 71423, 71425, 71427,
    71429, 71432, 71434, 71436, 71438, 71440, 71442, 71445,
    71447, 71449, 71451, 71453, 71455, 71458, 71460, 71462,
    71464, 71466, 71468, 71471, 71473, 71475, 71477, 71479,
    71481, 71484, 71486, 71488, 71490, 71492, 71494, 71497,
    71499, 71501, 71503, 71505, 71507, 71510, 71512, 71514,
    71516, 71518, 71520, 71523, 71525, 71527, 71529, 71531,
    71533, 71536, 71538, 71540, 71542, 71544, 71546, 71549,
    71551, 71553, 71555, 71557, 71559, 71562, 71564, 71566,
    71568, 71570, 71572, 71575, 71577, 71579, 71581, 71583,
    71585, 71588, 71590, 71592, 71594, 71596, 71599, 71601,
    71603, 71605, 71607, 71609, 71612, 71614, 71616, 71618,
    71620, 71622, 71625, 71627, 71629, 71631, 71633, 71635,
    71638, 71640, 71642, 71644, 71646, 71649, 71651, 71653,
    71655, 71657, 71659, 71662, 71664, 71666, 71668, 71670,
    71672, 71675, 71677, 71679, 71681, 71683, 71686, 71688,
    71690, 71692, 71694, 71696, 71699, 71701, 71703, 71705,
    71707, 71709, 71712, 71714, 71716, 71718, 71720, 71723,
    71725, 71727, 71729, 71731, 71733, 71736, 71738, 71740,
    71742, 71744, 71747, 71749, 71751, 71753, 71755, 71757,
    71760, 71762, 71764, 71766, 71768, 71771, 71773, 71775,
    71777, 71779, 71782, 71784, 71786, 71788, 71790, 71792,
    71795, 71797, 71799, 71801, 71803, 71806, 71808, 71810,
    71812, 71814, 71816, 71819, 71821, 71823, 71825, 71827,
    71830, 71832, 71834, 71836, 71838, 71841, 71843, 71845,
    71847, 71849, 71851, 71854, 71856, 71858, 71860, 71862,
    71865, 71867, 71869, 71871, 71873, 71876, 71878, 71880,
    71882, 71884, 71887, 71889, 71891, 71893, 71895, 71897,
    71900, 71902, 71904, 71906, 71908, 71911, 71913, 71915,
    71917, 71919, 71922, 71924, 71926, 71928, 71930, 71933,
    71935, 71937, 71939, 71941, 71944, 71946, 71948, 71950,
    71952, 71955, 71957, 71959, 71961, 71963, 71966, 71968,
    71970, 71972, 71974, 71976, 71979, 71981, 71983, 71985,
    71987, 71990, 71992, 71994, 71996, 71998, 72001, 72003,
    72005, 72007, 72009, 72012, 72014, 72016, 72018, 72020,
    72023, 72025, 72027, 72029, 72031, 72034, 72036, 72038,
    72040, 72042, 72045, 72047, 72049, 72051, 72053, 72056,
    72058, 72060, 72062, 72064, 72067, 72069, 72071, 72073,
    72076, 72078, 72080, 72082, 72084, 72087, 72089, 72091,
    72093, 72095, 72098, 72100, 72102, 72104, 72106, 72109,
    72111, 72113, 72115, 72117, 72120, 72122, 72124, 72126,
    72128, 72131, 72133, 72135, 72137, 72139, 72142, 72144,
    72146, 72148, 72151, 72153, 72155, 72157, 72159, 72162,
    72164, 72166, 72168, 72170, 72173, 72175, 72177, 72179,
    72181, 72184, 72186, 72188, 72190, 72193, 72195, 72197,
    72199, 72201, 72204, 72206, 72208, 72210, 72212, 72215,
    72217, 72219, 72221, 72223, 72226, 72228, 72230, 72232,
    72235, 72237, 72239, 72241, 72243, 72246, 72248, 72250,
    72252, 72254, 72257, 72259, 72261, 72263, 72266, 72268,
    72270, 72272, 72274, 72277, 72279, 72281, 72283, 72286,
    72288, 72290, 72292, 72294, 72297, 72299, 72301, 72303,
    72305, 72308, 72310, 72312, 72314, 72317, 72319, 72321,
    72323, 72325, 72328, 72330, 72332, 72334, 72337, 72339,
    72341, 72343, 72345, 72348, 72350, 72352, 72354, 72357,
    72359, 72361, 72363, 72365, 72368, 72370, 72372, 72374,
    72377, 72379, 72381, 72383, 72385, 72388, 72390, 72392,
    72394, 72397, 72399, 72401, 72403, 72405, 72408, 72410,
    72412, 72414, 72417, 72419, 72421, 72423, 72426, 72428,
    72430, 72432, 72434, 72437, 72439, 72441, 72443, 72446,
    72448, 72450, 72452, 72454, 72457, 72459, 72461, 72463,
    72466, 72468, 72470, 72472, 72475, 72477, 72479, 72481,
    72483, 72486, 72488, 72490, 72492, 72495, 72497, 72499,
    72501, 72504, 72506, 72508, 72510, 72513, 72515, 72517,
    72519, 72521, 72524, 72526, 72528, 72530, 72533, 72535,
    72537, 72539, 72542, 72544, 72546, 72548, 72550, 72553,
    72555, 72557, 72559, 72562, 72564, 72566, 72568, 72571,
    72573, 72575, 72577, 72580, 72582, 72584, 72586, 72589,
    72591, 72593, 72595, 72597, 72600, 72602, 72604, 72606,
    72609, 72611, 72613, 72615, 72618, 72620, 72622, 72624,
    72627, 72629, 72631, 72633, 72636, 72638, 72640, 72642,
    72645, 72647, 72649, 72651, 72653, 72656, 72658, 72660,
    72662, 72665, 72667, 72669, 72671, 72674, 72676, 72678,
    72680, 72683, 72685, 72687, 72689, 72692, 72694, 72696,
    72698, 72701, 72703, 72705, 72707, 72710, 72712, 72714,
    72716, 72719, 72721, 72723, 72725, 72728, 72730, 72732,
    72734, 72737, 72739, 72741, 72743, 72746, 72748, 72750,
    72752, 72755, 72757, 72759, 72761, 72764, 72766, 72768,
    72770, 72773, 72775, 72777, 72779, 72782, 72784, 72786,
    72788, 72791, 72793, 72795, 72797, 72800, 72802, 72804,
    72806, 72809, 72811, 72813, 72815, 72818, 72820, 72822,
    72824, 72827, 72829, 72831, 72833, 72836, 72838, 72840,
    72842, 72845, 72847, 72849, 72851, 72854, 72856, 72858,
    72860, 72863, 72865, 72867, 72869, 72872, 72874, 72876,
    72879, 72881, 72883, 72885, 72888, 72890, 72892, 72894,
    72897, 72899, 72901, 72903, 72906, 72908, 72910, 72912,
    72915, 72917, 72919, 72921, 72924, 72926, 72928, 72931,
    72933, 72935, 72937, 72940, 72942, 72944, 72946, 72949,
    72951, 72953, 72955, 72958, 72960, 72962, 72964, 72967,
    72969, 72971, 72974, 72976, 72978, 72980, 72983, 72985,
    72987, 72989, 72992, 72994, 72996, 72998, 73001, 73003,
    73005, 73008, 73010, 73012, 73014, 73017, 73019, 73021,
    73023, 73026, 73028, 73030, 73032, 73035, 73037, 73039,
    73042, 73044, 73046, 73048, 73051, 73053, 73055, 73057,
    73060, 73062, 73064, 73067, 73069, 73071, 73073, 73076,
    73078, 73080, 73082, 73085, 73087, 73089, 73091, 73094,
    73096, 73098, 73101, 73103, 73105, 73107, 73110, 73112,
    73114, 73117, 73119, 73121, 73123, 73126, 73128, 73130,
    73132, 73135, 73137, 73139, 73142, 73144, 73146, 73148,
    73151, 73153, 73155, 73157, 73160, 73162, 73164, 73167,
    73169, 73171, 73173, 73176, 73178, 73180, 73183, 73185,
    73187, 73189, 73192, 73194, 73196, 73199, 73201, 73203,
    73205, 73208, 73210, 73212, 73214, 73217, 73219, 73221,
    73224, 73226, 73228, 73230, 73233, 73235, 73237, 73240,
    73242, 73244, 73246, 73249, 73251, 73253, 73256, 73258,
    73260, 73262, 73265, 73267, 73269, 73272, 73274, 73276,
    73278, 73281, 73283, 73285, 73288, 73290, 73292, 73294,
    73297, 73299, 73301, 73304, 73306, 73308, 73310, 73313,
    73315, 73317, 73320, 73322, 73324, 73326, 73329, 73331,
    73333, 73336, 73338, 73340, 73343, 73345, 73347, 73349,
    73352, 73354, 73356, 73359, 73361, 73363, 73365, 73368,
    73370, 73372, 73375, 73377, 73379, 73382, 73384, 73386,
    73388, 73391, 73393, 73395, 73398, 73400, 73402, 73404,
    73407, 73409, 73411, 73414, 73416, 73418, 73421, 73423,
    73425, 73427, 73430, 73432, 73434, 73437, 73439, 73441,
    73443, 73446, 73448, 73450, 73453, 73455, 73457, 73460,
    73462, 73464, 73466, 73469, 73471, 73473, 73476, 73478,
    73480, 73483, 73485, 73487, 73490, 73492, 73494, 73496,
    73499, 73501, 73503, 73506, 73508, 73510, 73513, 73515,
    73517, 73519, 73522, 73524, 73526, 73529, 73531, 73533,
    73536, 73538, 73540, 73542, 73545, 73547, 73549, 73552,
    73554, 73556, 73559, 73561, 73563, 73566, 73568, 73570,
    73572, 73575, 73577, 73579, 73582, 73584, 73586, 73589,
    73591, 73593, 73596, 73598, 73600, 73602, 73605, 73607,
    73609, 73612, 73614, 73616, 73619, 73621, 73623, 73626,
    73628, 73630, 73633, 73635, 73637, 73639, 73642, 73644,
    73646, 73649, 73651, 73653, 73656, 73658, 73660, 73663,
    73665, 73667, 73670, 73672, 73674, 73676, 73679, 73681,
    73683, 73686, 73688, 73690, 73693, 73695, 73697, 73700,
    73702, 73704, 73707, 73709, 73711, 73714, 73716, 73718,
    73721, 73723, 73725, 73727, 73730, 73732, 73734, 73737,
    73739, 73741, 73744, 73746, 73748, 73751, 73753, 73755,
    73758, 73760, 73762, 73765, 73767, 73769, 73772, 73774,
    73776, 73779, 73781, 73783, 73786, 73788, 73790, 73792,
    73795, 73797, 73799, 73802, 73804, 73806, 73809, 73811,
    73813, 73816, 73818, 73820, 73823, 73825, 73827, 73830,
    73832, 73834, 73837, 73839, 73841, 73844, 73846, 73848,
    73851, 73853, 73855, 73858, 73860, 73862, 73865, 73867,
    73869, 73872, 73874, 73876, 73879, 73881, 73883, 73886,
    73888, 73890, 73893, 73895, 73897, 73900, 73902, 73904,
    73907, 73909, 73911, 73914, 73916, 73918, 73921, 73923,
    73925, 73928, 73930, 73932, 73935, 73937, 73939, 73942,
    73944, 73946, 73949, 73951, 73953, 73956, 73958, 73960,
    73963, 73965, 73967, 73970, 73972, 73974, 73977, 73979,
    73981, 73984, 73986, 73988, 73991, 73993, 73995, 73998,
    74000, 74002, 74005, 74007, 74009, 74012, 74014, 74016,
    74019, 74021, 74023, 74026, 74028, 74030, 74033, 74035,
    74037, 74040, 74042, 74045, 74047, 74049, 74052, 74054,
    74056, 74059, 74061, 74063, 74066, 74068, 74070, 74073,
    74075, 74077, 74080, 74082, 74084, 74087, 74089, 74091,
    74094, 74096, 74098, 74101, 74103, 74105, 74108, 74110,
    74113, 74115, 74117, 74120, 74122, 74124, 74127, 74129,
    74131, 74134, 74136, 74138, 74141, 74143, 74145, 74148,
    74150, 74152, 74155, 74157, 74160, 74162, 74164, 74167,
    74169, 74171, 74174, 74176, 74178, 74181, 74183, 74185,
    74188, 74190, 74192, 74195, 74197, 74200, 74202, 74204,
    74207, 74209, 74211, 74214, 74216, 74218, 74221, 74223,
    74225, 74228, 74230, 74233, 74235, 74237, 74240, 74242,
    74244, 74247, 74249, 74251, 74254, 74256, 74258, 74261,
    74263, 74266, 74268, 74270, 74273, 74275, 74277, 74280,
    74282, 74284, 74287, 74289, 74292, 74294, 74296, 74299,
    74301, 74303, 74306, 74308, 74310, 74313, 74315, 74317,
    74320, 74322, 74325, 74327, 74329, 74332, 74334, 74336,
    74339, 74341, 74344, 74346, 74348, 74351, 74353, 74355,
    74358, 74360, 74362, 74365, 74367, 74370, 74372, 74374,
    74377, 74379, 74381, 74384, 74386, 74388, 74391, 74393,
    74396, 74398, 74400, 74403, 74405, 74407, 74410, 74412,
    74415, 74417, 74419, 74422, 74424, 74426, 74429, 74431,
    74434, 74436, 74438, 74441, 74443, 74445, 74448, 74450,
    74453, 74455, 74457, 74460, 74462, 74464, 74467, 74469,
    74472, 74474, 74476, 74479, 74481, 74483, 74486, 74488,
    74491, 74493, 74495, 74498, 74500, 74502, 74505, 74507,
    74510, 74512, 74514, 74517, 74519, 74521, 74524, 74526,
    74529, 74531, 74533, 74536, 74538, 74541, 74543, 74545,
    74548, 74550, 74552, 74555, 74557, 74560, 74562, 74564,
    74567, 74569, 74571, 74574, 74576, 74579, 74581, 74583,
    74586, 74588, 74591, 74593, 74595, 74598, 74600, 74602,
    74605, 74607, 74610, 74612, 74614, 74617, 74619, 74622,
    74624, 74626, 74629, 74631, 74634, 74636, 74638, 74641,
    74643, 74645, 74648, 74650, 74653, 74655, 74657, 74660,
    74662, 74665, 74667, 74669, 74672, 74674, 74677, 74679,
    74681, 74684, 74686, 74689, 74691, 74693, 74696, 74698,
    74700, 74703, 74705, 74708, 74710, 74712, 74715, 74717,
    74720, 74722, 74724, 74727, 74729, 74732, 74734, 74736,
    74739, 74741, 74744, 74746, 74748, 74751, 74753, 74756,
    74758, 74760, 74763, 74765, 74768, 74770, 74772, 74775,
    74777, 74780, 74782, 74784, 74787, 74789, 74792, 74794,
    74796, 74799, 74801, 74804, 74806, 74808, 74811, 74813,
    74816, 74818, 74820, 74823, 74825, 74828, 74830, 74832,
    74835, 74837, 74840, 74842, 74844, 74847, 74849, 74852,
    74854, 74856, 74859, 74861, 74864, 74866, 74869, 74871,
    74873, 74876, 74878, 74881, 74883, 74885, 74888, 74890,
    74893, 74895, 74897, 74900, 74902, 74905, 74907, 74909,
    74912, 74914, 74917, 74919, 74922, 74924, 74926, 74929,
    74931, 74934, 74936, 74938, 74941, 74943, 74946, 74948,
    74950, 74953, 74955, 74958, 74960, 74963, 74965, 74967,
    74970, 74972, 74975, 74977, 74979, 74982, 74984, 74987,
    74989, 74992, 74994, 74996, 74999, 75001, 75004, 75006,
    75008, 75011, 75013, 75016, 75018, 75021, 75023, 75025,
    75028, 75030, 75033, 75035, 75038, 75040, 75042, 75045,
    75047, 75050, 75052, 75054, 75057, 75059, 75062, 75064,
    75067, 75069, 75071, 75074, 75076, 75079, 75081, 75084,
    75086, 75088, 75091, 75093, 75096, 75098, 75101, 75103,
    75105, 75108, 75110, 75113, 75115, 75118, 75120, 75122,
    75125, 75127, 75130, 75132, 75134, 75137, 75139, 75142,
    75144, 75147, 75149, 75152, 75154, 75156, 75159, 75161,
    75164, 75166, 75169, 75171, 75173, 75176, 75178, 75181,
    75183, 75186, 75188, 75190, 75193, 75195, 75198, 75200,
    75203, 75205, 75207, 75210, 75212, 75215, 75217, 75220,
    75222, 75225, 75227, 75229, 75232, 75234, 75237, 75239,
    75242, 75244, 75246, 75249, 75251, 75254, 75256, 75259,
    75261, 75264, 75266, 75268, 75271, 75273, 75276, 75278,
    75281, 75283, 75285, 75288, 75290, 75293, 75295, 75298,
    75300, 75303, 75305, 75307, 75310, 75312, 75315, 75317,
    75320, 75322, 75325, 75327, 75329, 75332, 75334, 75337,
    75339, 75342, 75344, 75347, 75349, 75351, 75354, 75356,
    75359, 75361, 75364, 75366, 75369, 75371, 75373, 75376,
    75378, 75381, 75383, 75386, 75388, 75391, 75393, 75396,
    75398, 75400, 75403, 75405, 75408, 75410, 75413, 75415,
    75418, 75420, 75423, 75425, 75427, 75430, 75432, 75435,
    75437, 75440, 75442, 75445, 75447, 75450, 75452, 75454,
    75457, 75459, 75462, 75464, 75467, 75469, 75472, 75474,
    75477, 75479, 75481, 75484, 75486, 75489, 75491, 75494,
    75496, 75499, 75501, 75504, 75506, 75508, 75511, 75513,
    75516, 75518, 75521, 75523, 75526, 75528, 75531, 75533,
    75536, 75538, 75540, 75543, 75545, 75548, 75550, 75553,
    75555, 75558, 75560, 75563, 75565, 75568, 75570, 75573,
    75575, 75577, 75580, 75582, 75585, 75587, 75590, 75592,
    75595, 75597, 75600, 75602, 75605, 75607, 75610, 75612,
    75614, 75617, 75619, 75622, 75624, 75627, 75629, 75632,
    75634, 75637, 75639, 75642, 75644, 75647, 75649, 75652,
    75654, 75656, 75659, 75661, 75664, 75666, 75669, 75671,
    75674, 75676, 75679, 75681, 75684, 75686, 75689, 75691,
    75694, 75696, 75699, 75701, 75703, 75706, 75708, 75711,
    75713, 75716, 75718, 75721, 75723, 75726, 75728, 75731,
    75733, 75736, 75738, 75741, 75743, 75746, 75748, 75751,
    75753, 75756, 75758, 75760, 75763, 75765, 75768, 75770,
    75773, 75775, 75778, 75780, 75783, 75785, 75788, 75790,
    75793, 75795, 75798, 75800, 75803, 75805, 75808, 75810,
    75813, 75815, 75818, 75820, 75823, 75825, 75828, 75830,
    75833, 75835, 75838, 75840, 75843, 75845, 75847, 75850,
    75852, 75855, 75857, 75860, 75862, 75865, 75867, 75870,
    75872, 75875, 75877, 75880, 75882, 75885, 75887, 75890,
    75892, 75895, 75897, 75900, 75902, 75905, 75907, 75910,
    75912, 75915, 75917, 75920, 75922, 75925, 75927, 75930,
    75932, 75935, 75937, 75940, 75942, 75945, 75947, 75950,
    75952, 75955, 75957, 75960, 75962, 75965, 75967, 75970,
    75972, 75975, 75977, 75980, 75982, 75985, 75987, 75990,
    75992, 75995, 75997, 76000, 76002, 76005, 76007, 76010,
    76012, 76015, 76017, 76020, 76022, 76025, 76027, 76030,
    76032, 76035, 76037, 76040, 76042, 76045, 76047, 76050,
    76052, 76055, 76057, 76060, 76062, 76065, 76067, 76070,
    76072, 76075, 76077, 76080, 76082, 76085, 76087, 76090,
    76092, 76095, 76097, 76100, 76102, 76105, 76108, 76110,
    76113, 76115, 76118, 76120, 76123, 76125, 76128, 76130,
    76133, 76135, 76138, 76140, 76143, 76145, 76148, 76150,
    76153, 76155, 76158, 76160, 76163, 76165, 76168, 76170,
    76173, 76175, 76178, 76180, 76183, 76185, 76188, 76191,
    76193, 76196, 76198, 76201, 76203, 76206, 76208, 76211,
    76213, 76216, 76218, 76221, 76223, 76226, 76228, 76231,
    76233, 76236, 76238, 76241, 76243, 76246, 76249, 76251,
    76254, 76256, 76259, 76261, 76264, 76266, 76269, 76271,
    76274, 76276, 76279, 76281, 76284, 76286, 76289, 76291,
    76294, 76297, 76299, 76302, 76304, 76307, 76309, 76312,
    76314, 76317, 76319, 76322, 76324, 76327, 76329, 76332,
    76334, 76337, 76340, 76342, 76345, 76347, 76350, 76352,
    76355, 76357, 76360, 76362, 76365, 76367, 76370, 76372,
    76375, 76378, 76380, 76383, 76385, 76388, 76390, 76393,
    76395, 76398, 76400, 76403, 76405, 76408, 76411, 76413,
    76416, 76418, 76421, 76423, 76426, 76428, 76431, 76433,
    76436, 76438, 76441, 76444, 76446, 76449, 76451, 76454,
    76456, 76459, 76461, 76464, 76466, 76469, 76472, 76474,
    76477, 76479, 76482, 76484, 76487, 76489, 76492, 76494,
    76497, 76500, 76502, 76505, 76507, 76510, 76512, 76515,
    76517, 76520, 76522, 76525, 76528, 76530, 76533, 76535,
    76538, 76540, 76543, 76545, 76548, 76551, 76553, 76556,
    76558, 76561, 76563, 76566, 76568, 76571, 76573, 76576,
    76579, 76581, 76584, 76586, 76589, 76591, 76594, 76596,
    76599, 76602, 76604, 76607, 76609, 76612, 76614, 76617,
    76619, 76622, 76625, 76627, 76630, 76632, 76635, 76637,
    76640, 76643, 76645, 76648, 76650, 76653, 76655, 76658,
    76660, 76663, 76666, 76668, 76671, 76673, 76676, 76678,
    76681, 76684, 76686, 76689, 76691, 76694, 76696, 76699,
    76701, 76704, 76707, 76709, 76712, 76714, 76717, 76719,
    76722, 76725, 76727, 76730, 76732, 76735, 76737, 76740,
    76743, 76745, 76748, 76750, 76753, 76755, 76758, 76761,
    76763, 76766, 76768, 76771, 76773, 76776, 76779, 76781,
    76784, 76786, 76789, 76791, 76794, 76797, 76799, 76802,
    76804, 76807, 76809, 76812, 76815, 76817, 76820, 76822,
    76825, 76827, 76830, 76833, 76835, 76838, 76840, 76843,
    76846, 76848, 76851, 76853, 76856, 76858, 76861, 76864,
    76866, 76869, 76871, 76874, 76876, 76879, 76882, 76884,
    76887, 76889, 76892, 76895, 76897, 76900, 76902, 76905,
    76907, 76910, 76913, 76915, 76918, 76920, 76923, 76926,
    76928, 76931, 76933, 76936, 76938, 76941, 76944, 76946,
    76949, 76951, 76954, 76957, 76959, 76962, 76964, 76967,
    76970, 76972, 76975, 76977, 76980, 76983, 76985, 76988,
    76990, 76993, 76995, 76998, 77001, 77003, 77006, 77008,
    77011, 77014, 77016, 77019, 77021, 77024, 77027, 77029,
    77032, 77034, 77037, 77040, 77042, 77045, 77047, 77050,
    77053, 77055, 77058, 77060, 77063, 77066, 77068, 77071,
    77073, 77076, 77079, 77081, 77084, 77086, 77089, 77092,
    77094, 77097, 77099, 77102, 77105, 77107, 77110, 77112,
    77115, 77118, 77120, 77123, 77125, 77128, 77131, 77133,
    77136, 77138, 77141, 77144, 77146, 77149, 77151, 77154,
    77157, 77159, 77162, 77165, 77167, 77170, 77172, 77175,
    77178, 77180, 77183, 77185, 77188, 77191, 77193, 77196,
    77198, 77201, 77204, 77206, 77209, 77212, 77214, 77217,
    77219, 77222, 77225, 77227, 77230, 77232, 77235, 77238,
    77240, 77243, 77246, 77248, 77251, 77253, 77256, 77259,
    77261, 77264, 77266, 77269, 77272, 77274, 77277, 77280,
    77282, 77285, 77287, 77290, 77293, 77295, 77298, 77301,
    77303, 77306, 77308, 77311, 77314, 77316, 77319, 77322,
    77324, 77327, 77329, 77332, 77335, 77337, 77340, 77343,
    77345, 77348, 77350, 77353, 77356, 77358, 77361, 77364,
    77366, 77369, 77371, 77374, 77377, 77379, 77382, 77385,
    77387, 77390, 77392, 77395, 77398, 77400, 77403, 77406,
    77408, 77411, 77414, 77416, 77419, 77421, 77424, 77427,
    77429, 77432, 77435, 77437, 77440, 77443, 77445, 77448,
    77450, 77453, 77456, 77458, 77461, 77464, 77466, 77469,
    77472, 77474, 77477, 77479, 77482, 77485, 77487, 77490,
    77493, 77495, 77498, 77501, 77503, 77506, 77508, 77511,
    77514, 77516, 77519, 77522, 77524, 77527, 77530, 77532,
    77535, 77538, 77540, 77543, 77546, 77548, 77551, 77553,
    77556, 77559, 77561, 77564, 77567, 77569, 77572, 77575,
    77577, 77580, 77583, 77585, 77588, 77591, 77593, 77596,
    77598, 77601, 77604, 77606, 77609, 77612, 77614, 77617,
    77620, 77622, 77625, 77628, 77630, 77633, 77636, 77638,
    77641, 77644, 77646, 77649, 77652, 77654, 77657, 77660,
    77662, 77665, 77668, 77670, 77673, 77675, 77678, 77681,
    77683, 77686, 77689, 77691, 77694, 77697, 77699, 77702,
    77705, 77707, 77710, 77713, 77715, 77718, 77721, 77723,
    77726, 77729, 77731, 77734, 77737, 77739, 77742, 77745,
    77747, 77750, 77753, 77755, 77758, 77761, 77763, 77766,
    77769, 77771, 77774, 77777, 77779, 77782, 77785, 77787,
    77790, 77793, 77795, 77798, 77801, 77803, 77806, 77809,
    77811, 77814, 77817, 77819, 77822, 77825, 77827, 77830,
    77833, 77836, 77838, 77841, 77844, 77846, 77849, 77852,
    77854, 77857, 77860, 77862, 77865, 77868, 77870, 77873,
    77876, 77878, 77881, 77884, 77886, 77889, 77892, 77894,
    77897, 77900, 77902, 77905, 77908, 77911, 77913, 77916,
    77919, 77921, 77924, 77927, 77929, 77932, 77935, 77937,
    77940, 77943, 77945, 77948, 77951, 77953, 77956, 77959,
    77962, 77964, 77967, 77970, 77972, 77975, 77978, 77980,
    77983, 77986, 77988, 77991, 77994, 77997, 77999, 78002,
    78005, 78007, 78010, 78013, 78015, 78018, 78021, 78023,
    78026, 78029, 78032, 78034, 78037, 78040, 78042, 78045,
    78048, 78050, 78053, 78056, 78058, 78061, 78064, 78067,
    78069, 78072, 78075, 78077, 78080, 78083, 78085, 78088,
    78091, 78094, 78096, 78099, 78102, 78104, 78107, 78110,
    78113, 78115, 78118, 78121, 78123, 78126, 78129, 78131,
    78134, 78137, 78140, 78142, 78145, 78148, 78150, 78153,
    78156, 78159, 78161, 78164, 78167, 78169, 78172, 78175,
    78177, 78180, 78183, 78186, 78188, 78191, 78194, 78196,
    78199, 78202, 78205, 78207, 78210, 78213, 78215, 78218,
    78221, 78224, 78226, 78229, 78232, 78234, 78237, 78240,
    78243, 78245, 78248, 78251, 78253, 78256, 78259, 78262,
    78264, 78267, 78270, 78273, 78275, 78278, 78281, 78283,
    78286, 78289, 78292, 78294, 78297, 78300, 78302, 78305,
    78308, 78311, 78313, 78316, 78319, 78322, 78324, 78327,
    78330, 78332, 78335, 78338, 78341, 78343, 78346, 78349,
    78352, 78354, 78357, 78360, 78362, 78365, 78368, 78371,
    78373, 78376, 78379, 78382, 78384, 78387, 78390, 78392,
    78395, 78398, 78401, 78403, 78406, 78409, 78412, 78414,
    78417, 78420, 78423, 78425, 78428, 78431, 78434, 78436,
    78439, 78442, 78444, 78447, 78450, 78453, 78455, 78458,
    78461, 78464, 78466, 78469, 78472, 78475, 78477, 78480,
    78483, 78486, 78488, 78491, 78494, 78497, 78499, 78502,
    78505, 78508, 78510, 78513, 78516, 78519, 78521, 78524,
    78527, 78529, 78532, 78535, 78538, 78540, 78543, 78546,
    78549, 78551, 78554, 78557, 78560, 78562, 78565, 78568,
    78571, 78573, 78576, 78579, 78582, 78584, 78587, 78590,
    78593, 78596, 78598, 78601, 78604, 78607, 78609, 78612,
    78615, 78618, 78620, 78623, 78626, 78629, 78631, 78634,
    78637, 78640, 78642, 78645, 78648, 78651, 78653, 78656,
    78659, 78662, 78664, 78667, 78670, 78673, 78676, 78678,
    78681, 78684, 78687, 78689, 78692, 78695, 78698, 78700,
    78703, 78706, 78709, 78711, 78714, 78717, 78720, 78723,
    78725, 78728, 78731, 78734, 78736, 78739, 78742, 78745,
    78747, 78750, 78753, 78756, 78759, 78761, 78764, 78767,
    78770, 78772, 78775, 78778, 78781, 78784, 78786, 78789,
    78792, 78795, 78797, 78800, 78803, 78806, 78809, 78811,
    78814, 78817, 78820, 78822, 78825, 78828, 78831, 78834,
    78836, 78839, 78842, 78845, 78847, 78850, 78853, 78856,
    78859, 78861, 78864, 78867, 78870, 78872, 78875, 78878,
    78881, 78884, 78886, 78889, 78892, 78895, 78898, 78900,
    78903, 78906, 78909, 78911, 78914, 78917, 78920, 78923,
    78925, 78928, 78931, 78934, 78937, 78939, 78942, 78945,
    78948, 78951, 78953, 78956, 78959, 78962, 78965, 78967,
    78970, 78973, 78976, 78979, 78981, 78984, 78987, 78990,
    78993, 78995, 78998, 79001, 79004, 79007, 79009, 79012,
    79015, 79018, 79021, 79023, 79026, 79029, 79032, 79035,
    79037, 79040, 79043, 79046, 79049, 79051, 79054, 79057,
    79060, 79063, 79065, 79068, 79071, 79074, 79077, 79079,
    79082, 79085, 79088, 79091, 79093, 79096, 79099, 79102,
    79105, 79108, 79110, 79113, 79116, 79119, 79122, 79124,
    79127, 79130, 79133, 79136, 79138, 79141, 79144, 79147,
    79150, 79153, 79155, 79158, 79161, 79164, 79167, 79169,
    79172, 79175, 79178, 79181, 79184, 79186, 79189, 79192,
    79195, 79198, 79200, 79203, 79206, 79209, 79212, 79215,
    79217, 79220, 79223, 79226, 79229, 79231, 79234, 79237,
    79240, 79243, 79246, 79248, 79251, 79254, 79257, 79260,
    79263, 79265, 79268, 79271, 79274, 79277, 79280, 79282,
    79285, 79288, 79291, 79294, 79297, 79299, 79302, 79305,
    79308, 79311, 79314, 79316, 79319, 79322, 79325, 79328,
    79331, 79333, 79336, 79339, 79342, 79345, 79348, 79350,
    79353, 79356, 79359, 79362, 79365, 79367, 79370, 79373,
    79376, 79379, 79382, 79385, 79387, 79390, 79393, 79396,
    79399, 79402, 79404, 79407, 79410, 79413, 79416, 79419,
    79422, 79424, 79427, 79430, 79433, 79436, 79439, 79441,
    79444, 79447, 79450, 79453, 79456, 79459, 79461, 79464,
    79467, 79470, 79473, 79476, 79479, 79481, 79484, 79487,
    79490, 79493, 79496, 79498, 79501, 79504, 79507, 79510,
    79513, 79516, 79518, 79521, 79524, 79527, 79530, 79533,
    79536, 79539, 79541, 79544, 79547, 79550, 79553, 79556,
    79559, 79561, 79564, 79567, 79570, 79573, 79576, 79579,
    79581, 79584, 79587, 79590, 79593, 79596, 79599, 79602,
    79604, 79607, 79610, 79613, 79616, 79619, 79622, 79624,
    79627, 79630, 79633, 79636, 79639, 79642, 79645, 79647,
    79650, 79653, 79656, 79659, 79662, 79665, 79668, 79670,
    79673, 79676, 79679, 79682, 79685, 79688, 79691, 79693,
    79696, 79699, 79702, 79705, 79708, 79711, 79714, 79717,
    79719, 79722, 79725, 79728, 79731, 79734, 79737, 79740,
    79742, 79745, 79748, 79751, 79754, 79757, 79760, 79763,
    79766, 79768, 79771, 79774, 79777, 79780, 79783, 79786,
    79789, 79792, 79794, 79797, 79800, 79803, 79806, 79809,
    79812, 79815, 79818, 79820, 79823, 79826, 79829, 79832,
    79835, 79838, 79841, 79844, 79847, 79849, 79852, 79855,
    79858, 79861, 79864, 79867, 79870, 79873, 79876, 79878,
    79881, 79884, 79887, 79890, 79893, 79896, 79899, 79902,
    79905, 79907, 79910, 79913, 79916, 79919, 79922, 79925,
    79928, 79931, 79934, 79937, 79939, 79942, 79945, 79948,
    79951, 79954, 79957, 79960, 79963, 79966, 79969, 79971,
    79974, 79977, 79980, 79983, 79986, 79989, 79992, 79995,
    79998, 80001, 80003, 80006, 80009, 80012, 80015, 80018,
    80021, 80024, 80027, 80030, 80033, 80036, 80038, 80041,
    80044, 80047, 80050, 80053, 80056, 80059, 80062, 80065,
    80068, 80071, 80074, 80076, 80079, 80082, 80085, 80088,
    80091, 80094, 80097, 80100, 80103, 80106, 80109, 80112,
    80115, 80117, 80120, 80123, 80126, 80129, 80132, 80135,
    80138, 80141, 80144, 80147, 80150, 80153, 80156, 80159,
    80161, 80164, 80167, 80170, 80173, 80176, 80179, 80182,
    80185, 80188, 80191, 80194, 80197, 80200, 80203, 80206,
    80208, 80211, 80214, 80217, 80220, 80223, 80226, 80229,
    80232, 80235, 80238, 80241, 80244, 80247, 80250, 80253,
    80256, 80259, 80261, 80264, 80267, 80270, 80273, 80276,
    80279, 80282, 80285, 80288, 80291, 80294, 80297, 80300,
    80303, 80306, 80309, 80312, 80315, 80318, 80321, 80323,
    80326, 80329, 80332, 80335, 80338, 80341, 80344, 80347,
    80350, 80353, 80356, 80359, 80362, 80365, 80368, 80371,
    80374, 80377, 80380, 80383, 80386, 80389, 80392, 80395,
    80397, 80400, 80403, 80406, 80409, 80412, 80415, 80418,
    80421, 80424, 80427, 80430, 80433, 80436, 80439, 80442,
    80445, 80448, 80451, 80454, 80457, 80460, 80463, 80466,
    80469, 80472, 80475, 80478, 80481, 80484, 80487, 80490,
    80493, 80496, 80499, 80501, 80504, 80507, 80510, 80513,
    80516, 80519, 80522, 80525, 80528, 80531, 80534, 80537,
    80540, 80543, 80546, 80549, 80552, 80555, 80558, 80561,
    80564, 80567, 80570, 80573, 80576, 80579, 80582, 80585,
    80588, 80591, 80594, 80597, 80600, 80603, 80606, 80609,
    80612, 80615, 80618, 80621, 80624, 80627, 80630, 80633,
    80636, 80639, 80642, 80645, 80648, 80651, 80654, 80657,
    80660, 80663, 80666, 80669, 80672, 80675, 80678, 80681,
    80684, 80687, 80690, 80693, 80696, 80699, 80702, 80705,
    80708, 80711, 80714, 80717, 80720, 80723, 80726, 80729,
    80732, 80735, 80738, 80741, 80744, 80747, 80750, 80753,
    80756, 80759, 80762, 80765, 80768, 80771, 80774, 80777,
    80780, 80783, 80786, 80789, 80792, 80795, 80798, 80801,
    80804, 80807, 80810, 80813, 80816, 80819, 80822, 80825,
    80828, 80831, 80834, 80837, 80840, 80843, 80847, 80850,
    80853, 80856, 80859, 80862, 80865, 80868, 80871, 80874,
    80877, 80880, 80883, 80886, 80889, 80892, 80895, 80898,
    80901, 80904, 80907, 80910, 80913, 80916, 80919, 80922,
    80925, 80928, 80931, 80934, 80937, 80940, 80943, 80946,
    80950, 80953, 80956, 80959, 80962, 80965, 80968, 80971,
    80974, 80977, 80980, 80983, 80986, 80989, 80992, 80995,
    80998, 81001, 81004, 81007, 81010, 81013, 81016, 81019,
    81023, 81026, 81029, 81032, 81035, 81038, 81041, 81044,
    81047, 81050, 81053, 81056, 81059, 81062, 81065, 81068,
    81071, 81074, 81077, 81080, 81084, 81087, 81090, 81093,
    81096, 81099, 81102, 81105, 81108, 81111, 81114, 81117,
    81120, 81123, 81126, 81129, 81132, 81136, 81139, 81142,
    81145, 81148, 81151, 81154, 81157, 81160, 81163, 81166,
    81169, 81172, 81175, 81178, 81181, 81185, 81188, 81191,
    81194, 81197, 81200, 81203, 81206, 81209, 81212, 81215,
    81218, 81221, 81224, 81228, 81231, 81234, 81237, 81240,
    81243, 81246, 81249, 81252, 81255, 81258, 81261, 81264,
    81268, 81271, 81274, 81277, 81280, 81283, 81286, 81289,
    81292, 81295, 81298, 81301, 81305, 81308, 81311, 81314,
    81317, 81320, 81323, 81326, 81329, 81332, 81335, 81338,
    81342, 81345, 81348, 81351, 81354, 81357, 81360, 81363,
    81366, 81369, 81372, 81376, 81379, 81382, 81385, 81388,
    81391, 81394, 81397, 81400, 81403, 81407, 81410, 81413,
    81416, 81419, 81422, 81425, 81428, 81431, 81434, 81438,
    81441, 81444, 81447, 81450, 81453, 81456, 81459, 81462,
    81465, 81469, 81472, 81475, 81478, 81481, 81484, 81487,
    81490, 81493, 81497, 81500, 81503, 81506, 81509, 81512,
    81515, 81518, 81521, 81525, 81528, 81531, 81534, 81537,
    81540, 81543, 81546, 81550, 81553, 81556, 81559, 81562,
    81565, 81568, 81571, 81574, 81578, 81581, 81584, 81587,
    81590, 81593, 81596, 81599, 81603, 81606, 81609, 81612,
    81615, 81618, 81621, 81624, 81628, 81631, 81634, 81637,
    81640, 81643, 81646, 81650, 81653, 81656, 81659, 81662,
    81665, 81668, 81671, 81675, 81678, 81681, 81684, 81687,
    81690, 81693, 81697, 81700, 81703, 81706, 81709, 81712,
    81715, 81719, 81722, 81725, 81728, 81731, 81734, 81737,
    81741, 81744, 81747, 81750, 81753, 81756, 81759, 81763,
    81766, 81769, 81772, 81775, 81778, 81781, 81785, 81788,
    81791, 81794, 81797, 81800, 81804, 81807, 81810, 81813,
    81816, 81819, 81822, 81826, 81829, 81832, 81835, 81838,
    81841, 81845, 81848, 81851, 81854, 81857, 81860, 81864,
    81867, 81870, 81873, 81876, 81879, 81883, 81886, 81889,
    81892, 81895, 81898, 81902, 81905, 81908, 81911, 81914,
    81917, 81921, 81924, 81927, 81930, 81933, 81936, 81940,
    81943, 81946, 81949, 81952, 81956, 81959, 81962, 81965,
    81968, 81971, 81975, 81978, 81981, 81984, 81987, 81990,
    81994, 81997, 82000, 82003, 82006, 82010, 82013, 82016,
    82019, 82022, 82026, 82029, 82032, 82035, 82038, 82041,
    82045, 82048, 82051, 82054, 82057, 82061, 82064, 82067,
    82070, 82073, 82077, 82080, 82083, 82086, 82089, 82093,
    82096, 82099, 82102, 82105, 82109, 82112, 82115, 82118,
    82121, 82125, 82128, 82131, 82134, 82137, 82141, 82144,
    82147, 82150, 82153, 82157, 82160, 82163, 82166, 82169,
    82173, 82176, 82179, 82182, 82185, 82189, 82192, 82195,
    82198, 82201, 82205, 82208, 82211, 82214, 82218, 82221,
    82224, 82227, 82230, 82234, 82237, 82240, 82243, 82247,
    82250, 82253, 82256, 82259, 82263, 82266, 82269, 82272,
    82276, 82279, 82282, 82285, 82288, 82292, 82295, 82298,
    82301, 82305, 82308, 82311, 82314, 82317, 82321, 82324,
    82327, 82330, 82334, 82337, 82340, 82343, 82347, 82350,
    82353, 82356, 82360, 82363, 82366, 82369, 82372, 82376,
    82379, 82382, 82385, 82389, 82392, 82395, 82398, 82402,
    82405, 82408, 82411, 82415, 82418, 82421, 82424, 82428,
    82431, 82434, 82437, 82441, 82444, 82447, 82450, 82454,
    82457, 82460, 82463, 82467, 82470, 82473, 82476, 82480,
    82483, 82486, 82489, 82493, 82496, 82499, 82502, 82506,
    82509, 82512, 82515, 82519, 82522, 82525, 82529, 82532,
    82535, 82538, 82542, 82545, 82548, 82551, 82555, 82558,
    82561, 82564, 82568, 82571, 82574, 82578, 82581, 82584,
    82587, 82591, 82594, 82597, 82600, 82604, 82607, 82610,
    82614, 82617, 82620, 82623, 82627, 82630, 82633, 82636,
    82640, 82643, 82646, 82650, 82653, 82656, 82659, 82663,
    82666, 82669, 82673, 82676, 82679, 82682, 82686, 82689,
    82692, 82696, 82699, 82702, 82705, 82709, 82712, 82715,
    82719, 82722, 82725, 82728, 82732, 82735, 82738, 82742,
    82745, 82748, 82752, 82755, 82758, 82761, 82765, 82768,
    82771, 82775, 82778, 82781, 82785, 82788, 82791, 82794,
    82798, 82801, 82804, 82808, 82811, 82814, 82818, 82821,
    82824, 82828, 82831, 82834, 82837, 82841, 82844, 82847,
    82851, 82854, 82857, 82861, 82864, 82867, 82871, 82874,
    82877, 82881, 82884, 82887, 82891, 82894, 82897, 82900,
    82904, 82907, 82910, 82914, 82917, 82920, 82924, 82927,
    82930, 82934, 82937, 82940, 82944, 82947, 82950, 82954,
    82957, 82960, 82964, 82967, 82970, 82974, 82977, 82980,
    82984, 82987, 82990, 82994, 82997, 83000, 83004, 83007,
    83010, 83014, 83017, 83020, 83024, 83027, 83030, 83034,
    83037, 83040, 83044, 83047, 83050, 83054, 83057, 83061,
    83064, 83067, 83071, 83074, 83077, 83081, 83084, 83087,
    83091, 83094, 83097, 83101, 83104, 83107, 83111, 83114,
    83117, 83121, 83124, 83128, 83131, 83134, 83138, 83141,
    83144, 83148, 83151, 83154, 83158, 83161, 83165, 83168,
    83171, 83175, 83178, 83181, 83185, 83188, 83191, 83195,
    83198, 83202, 83205, 83208, 83212, 83215, 83218, 83222,
    83225, 83229, 83232, 83235, 83239, 83242, 83245, 83249,
    83252, 83256, 83259, 83262, 83266, 83269, 83272, 83276,
    83279, 83283, 83286, 83289, 83293, 83296, 83300, 83303,
    83306, 83310, 83313, 83317, 83320, 83323, 83327, 83330,
    83333, 83337, 83340, 83344, 83347, 83350, 83354, 83357,
    83361, 83364, 83367, 83371, 83374, 83378, 83381, 83384,
    83388, 83391, 83395, 83398, 83401, 83405, 83408, 83412,
    83415, 83418, 83422, 83425, 83429, 83432, 83435, 83439,
    83442, 83446, 83449, 83453, 83456, 83459, 83463, 83466,
    83470, 83473, 83476, 83480, 83483, 83487, 83490, 83494,
    83497, 83500, 83504, 83507, 83511, 83514, 83517, 83521,
    83524, 83528, 83531, 83535, 83538, 83541, 83545, 83548,
    83552, 83555, 83559, 83562, 83565, 83569, 83572, 83576,
    83579, 83583, 83586, 83590, 83593, 83596, 83600, 83603,
    83607, 83610, 83614, 83617, 83620, 83624, 83627, 83631,
    83634, 83638, 83641, 83645, 83648, 83651, 83655, 83658,
    83662, 83665, 83669, 83672, 83676, 83679, 83683, 83686,
    83689, 83693, 83696, 83700, 83703, 83707, 83710, 83714,
    83717, 83721, 83724, 83727, 83731, 83734, 83738, 83741,
    83745, 83748, 83752, 83755, 83759, 83762, 83766, 83769,
    83772, 83776, 83779, 83783, 83786, 83790, 83793, 83797,
    83800, 83804, 83807, 83811, 83814, 83818, 83821, 83825,
    83828, 83831, 83835, 83838, 83842, 83845, 83849, 83852,
    83856, 83859, 83863, 83866, 83870, 83873, 83877, 83880,
    83884, 83887, 83891, 83894, 83898, 83901, 83905, 83908,
    83912, 83915, 83919, 83922, 83926, 83929, 83933, 83936,
    83940, 83943, 83947, 83950, 83954, 83957, 83961, 83964,
    83968, 83971, 83975, 83978, 83982, 83985, 83989, 83992,
    83996, 83999, 84003, 84006, 84010, 84013, 84017, 84020,
    84024, 84027, 84031, 84034, 84038, 84041, 84045, 84048,
    84052, 84055, 84059, 84062, 84066, 84069, 84073, 84076,
    84080, 84084, 84087, 84091, 84094, 84098, 84101, 84105,
    84108, 84112, 84115, 84119, 84122, 84126, 84129, 84133,
    84136, 84140, 84144, 84147, 84151, 84154, 84158, 84161,
    84165, 84168, 84172, 84175, 84179, 84182, 84186, 84190,
    84193, 84197, 84200, 84204, 84207, 84211, 84214, 84218,
    84221, 84225, 84229, 84232, 84236, 84239, 84243, 84246,
    84250, 84253, 84257, 84261, 84264, 84268, 84271, 84275,
    84278, 84282, 84285, 84289, 84293, 84296, 84300, 84303,
    84307, 84310, 84314, 84317, 84321, 84325, 84328, 84332,
    84335, 84339, 84342, 84346, 84350, 84353, 84357, 84360,
    84364, 84367, 84371, 84375, 84378, 84382, 84385, 84389,
    84393, 84396, 84400, 84403, 84407, 84410, 84414, 84418,
    84421, 84425, 84428, 84432, 84436, 84439, 84443, 84446,
    84450, 84454, 84457, 84461, 84464, 84468, 84471, 84475,
    84479, 84482, 84486, 84489, 84493, 84497, 84500, 84504,
    84507, 84511, 84515, 84518, 84522, 84525, 84529, 84533,
    84536, 84540, 84544, 84547, 84551, 84554, 84558, 84562,
    84565, 84569, 84572, 84576, 84580, 84583, 84587, 84590,
    84594, 84598, 84601, 84605, 84609, 84612, 84616, 84619,
    84623, 84627, 84630, 84634, 84638, 84641, 84645, 84648,
    84652, 84656, 84659, 84663, 84667, 84670, 84674, 84678,
    84681, 84685, 84688, 84692, 84696, 84699, 84703, 84707,
    84710, 84714, 84718, 84721, 84725, 84728, 84732, 84736,
    84739, 84743, 84747, 84750, 84754, 84758, 84761, 84765,
    84769, 84772, 84776, 84780, 84783, 84787, 84791, 84794,
    84798, 84802, 84805, 84809, 84812, 84816, 84820, 84823,
    84827, 84831, 84834, 84838, 84842, 84845, 84849, 84853,
    84856, 84860, 84864, 84867, 84871, 84875, 84879, 84882,
    84886, 84890, 84893, 84897, 84901, 84904, 84908, 84912,
    84915, 84919, 84923, 84926, 84930, 84934, 84937, 84941,
    84945, 84948, 84952, 84956, 84960, 84963, 84967, 84971,
    84974, 84978, 84982, 84985, 84989, 84993, 84996, 85000,
    85004, 85008, 85011, 85015, 85019, 85022, 85026, 85030,
    85033, 85037, 85041, 85045, 85048, 85052, 85056, 85059,
    85063, 85067, 85071, 85074, 85078, 85082, 85085, 85089,
    85093, 85097, 85100, 85104, 85108, 85111, 85115, 85119,
    85123, 85126, 85130, 85134, 85138, 85141, 85145, 85149,
    85152, 85156, 85160, 85164, 85167, 85171, 85175, 85179,
    85182, 85186, 85190, 85193, 85197, 85201, 85205, 85208,
    85212, 85216, 85220, 85223, 85227, 85231, 85235, 85238,
    85242, 85246, 85250, 85253, 85257, 85261, 85265, 85268,
    85272, 85276, 85280, 85283, 85287, 85291, 85295, 85298,
    85302, 85306, 85310, 85314, 85317, 85321, 85325, 85329,
    85332, 85336, 85340, 85344, 85347, 85351, 85355, 85359,
    85362, 85366, 85370, 85374, 85378, 85381, 85385, 85389,
    85393, 85396, 85400, 85404, 85408, 85412, 85415, 85419,
    85423, 85427, 85431, 85434, 85438, 85442, 85446, 85449,
    85453, 85457, 85461, 85465, 85468, 85472, 85476, 85480,
    85484, 85487, 85491, 85495, 85499, 85503, 85506, 85510,
    85514, 85518, 85522, 85525, 85529, 85533, 85537, 85541,
    85544, 85548, 85552, 85556, 85560, 85564, 85567, 85571,
    85575, 85579, 85583, 85586, 85590, 85594, 85598, 85602,
    85606, 85609, 85613, 85617, 85621, 85625, 85629, 85632,
    85636, 85640, 85644, 85648, 85652, 85655, 85659, 85663,
    85667, 85671, 85675, 85678, 85682, 85686, 85690, 85694,
    85698, 85701, 85705, 85709, 85713, 85717, 85721, 85725,
    85728, 85732, 85736, 85740, 85744, 85748, 85752, 85755,
    85759, 85763, 85767, 85771, 85775, 85779, 85782, 85786,
    85790, 85794, 85798, 85802, 85806, 85809, 85813, 85817,
    85821, 85825, 85829, 85833, 85837, 85840, 85844, 85848,
    85852, 85856, 85860, 85864, 85868, 85871, 85875, 85879,
    85883, 85887, 85891, 85895, 85899, 85903, 85906, 85910,
    85914, 85918, 85922, 85926, 85930, 85934, 85938, 85941,
    85945, 85949, 85953, 85957, 85961, 85965, 85969, 85973,
    85977, 85981, 85984, 85988, 85992, 85996, 86000, 86004,
    86008, 86012, 86016, 86020, 86024, 86027, 86031, 86035,
    86039, 86043, 86047, 86051, 86055, 86059, 86063, 86067,
    86071, 86075, 86078, 86082, 86086, 86090, 86094, 86098,
    86102, 86106, 86110, 86114, 86118, 86122, 86126, 86130,
    86134, 86138, 86141, 86145, 86149, 86153, 86157, 86161,
    86165, 86169, 86173, 86177, 86181, 86185, 86189, 86193,
    86197, 86201, 86205, 86209, 86213, 86217, 86221, 86224,
    86228, 86232, 86236, 86240, 86244, 86248, 86252, 86256,
    86260, 86264, 86268, 86272, 86276, 86280, 86284, 86288,
    86292, 86296, 86300, 86304, 86308, 86312, 86316, 86320,
    86324, 86328, 86332, 86336, 86340, 86344, 86348, 86352,
    86356, 86360, 86364, 86368, 86372, 86376, 86380, 86384,
    86388, 86392, 86396, 86400, 86404, 86408, 86412, 86416,
    86420, 86424, 86428, 86432, 86436, 86440, 86444, 86448,
    86452, 86456, 86460, 86464, 86468, 86472, 86476, 86480,
    86484, 86488, 86492, 86496, 86500, 86504, 86508, 86512,
    86516, 86520, 86524, 86528, 86532, 86536, 86540, 86544,
    86549, 86553, 86557, 86561, 86565, 86569, 86573, 86577,
    86581, 86585, 86589, 86593, 86597, 86601, 86605, 86609,
    86613, 86617, 86621, 86625, 86630, 86634, 86638, 86642,
    86646, 86650, 86654, 86658, 86662, 86666, 86670, 86674,
    86678, 86682, 86686, 86691, 86695, 86699, 86703, 86707,
    86711, 86715, 86719, 86723, 86727, 86731, 86735, 86739,
    86744, 86748, 86752, 86756, 86760, 86764, 86768, 86772,
    86776, 86780, 86784, 86789, 86793, 86797, 86801, 86805,
    86809, 86813, 86817, 86821, 86825, 86830, 86834, 86838,
    86842, 86846, 86850, 86854, 86858, 86863, 86867, 86871,
    86875, 86879, 86883, 86887, 86891, 86895, 86900, 86904,
    86908, 86912, 86916, 86920, 86924, 86928, 86933, 86937,
    86941, 86945, 86949, 86953, 86957, 86962, 86966, 86970,
    86974, 86978, 86982, 86986, 86991, 86995, 86999, 87003,
    87007, 87011, 87016, 87020, 87024, 87028, 87032, 87036,
    87040, 87045, 87049, 87053, 87057, 87061, 87065, 87070,
    87074, 87078, 87082, 87086, 87090, 87095, 87099, 87103,
    87107, 87111, 87116, 87120, 87124, 87128, 87132, 87136,
    87141, 87145, 87149, 87153, 87157, 87162, 87166, 87170,
    87174, 87178, 87183, 87187, 87191, 87195, 87199, 87204,
    87208, 87212, 87216, 87220, 87225, 87229, 87233, 87237,
    87241, 87246, 87250, 87254, 87258, 87263, 87267, 87271,
    87275, 87279, 87284, 87288, 87292, 87296, 87301, 87305,
    87309, 87313, 87318, 87322, 87326, 87330, 87334, 87339,
    87343, 87347, 87351, 87356, 87360, 87364, 87368, 87373,
    87377, 87381, 87385, 87390, 87394, 87398, 87402, 87407,
    87411, 87415, 87419, 87424, 87428, 87432, 87437, 87441,
    87445, 87449, 87454, 87458, 87462, 87466, 87471, 87475,
    87479, 87484, 87488, 87492, 87496, 87501, 87505, 87509,
    87514, 87518, 87522, 87526, 87531, 87535, 87539, 87544,
    87548, 87552, 87556, 87561, 87565, 87569, 87574, 87578,
    87582, 87587, 87591, 87595, 87599, 87604, 87608, 87612,
    87617, 87621, 87625, 87630, 87634, 87638, 87643, 87647,
    87651, 87656, 87660, 87664, 87669, 87673, 87677, 87682,
    87686, 87690, 87695, 87699, 87703, 87708, 87712, 87716,
    87721, 87725, 87729, 87734, 87738, 87742, 87747, 87751,
    87755, 87760, 87764, 87768, 87773, 87777, 87782, 87786,
    87790, 87795, 87799, 87803, 87808, 87812, 87817, 87821,
    87825, 87830, 87834, 87838, 87843, 87847, 87852, 87856,
    87860, 87865, 87869, 87873, 87878, 87882, 87887, 87891,
    87895, 87900, 87904, 87909, 87913, 87917, 87922, 87926,
    87931, 87935, 87939, 87944, 87948, 87953, 87957, 87961,
    87966, 87970, 87975, 87979, 87984, 87988, 87992, 87997,
    88001, 88006, 88010, 88014, 88019, 88023, 88028, 88032,
    88037, 88041, 88046, 88050, 88054, 88059, 88063, 88068,
    88072, 88077, 88081, 88085, 88090, 88094, 88099, 88103,
    88108, 88112, 88117, 88121, 88126, 88130, 88135, 88139,
    88143, 88148, 88152, 88157, 88161, 88166, 88170, 88175,
    88179, 88184, 88188, 88193, 88197, 88202, 88206, 88211,
    88215, 88220, 88224, 88229, 88233, 88238, 88242, 88247,
    88251, 88256, 88260, 88265, 88269, 88274, 88278, 88283,
    88287, 88292, 88296, 88301, 88305, 88310, 88314, 88319,
    88323, 88328, 88332, 88337, 88341, 88346, 88350, 88355,
    88359, 88364, 88368, 88373, 88377, 88382, 88387, 88391,
    88396, 88400, 88405, 88409, 88414, 88418, 88423, 88427,
    88432, 88437, 88441, 88446, 88450, 88455, 88459, 88464,
    88469, 88473, 88478, 88482, 88487, 88491, 88496, 88500,
    88505, 88510, 88514, 88519, 88523, 88528, 88533, 88537,
    88542, 88546, 88551, 88555, 88560, 88565, 88569, 88574,
    88578, 88583, 88588, 88592, 88597, 88601, 88606, 88611,
    88615, 88620, 88625, 88629, 88634, 88638, 88643, 88648,
    88652, 88657, 88661, 88666, 88671, 88675, 88680, 88685,
    88689, 88694, 88699, 88703, 88708, 88712, 88717, 88722,
    88726, 88731, 88736, 88740, 88745, 88750, 88754, 88759,
    88764, 88768, 88773, 88778, 88782, 88787, 88792, 88796,
    88801, 88806, 88810, 88815, 88820, 88824, 88829, 88834,
    88838, 88843, 88848, 88852, 88857, 88862, 88866, 88871,
    88876, 88881, 88885, 88890, 88895, 88899, 88904, 88909,
    88913, 88918, 88923, 88928, 88932, 88937, 88942, 88946,
    88951, 88956, 88961, 88965, 88970, 88975, 88979, 88984,
    88989, 88994, 88998, 89003, 89008, 89013, 89017, 89022,
    89027, 89032, 89036, 89041, 89046, 89051, 89055, 89060,
    89065, 89070, 89074, 89079, 89084, 89089, 89093, 89098,
    89103, 89108, 89113, 89117, 89122, 89127, 89132, 89136,
    89141, 89146, 89151, 89156, 89160, 89165, 89170, 89175,
    89180, 89184, 89189, 89194, 89199, 89204, 89208, 89213,
    89218, 89223, 89228, 89232, 89237, 89242, 89247, 89252,
    89256, 89261, 89266, 89271, 89276, 89281, 89285, 89290,
    89295, 89300, 89305, 89310, 89314, 89319, 89324, 89329,
    89334, 89339, 89344, 89348, 89353, 89358, 89363, 89368,
    89373, 89378, 89382, 89387, 89392, 89397, 89402, 89407,
    89412, 89417, 89421, 89426, 89431, 89436, 89441, 89446,
    89451, 89456, 89461, 89465, 89470, 89475, 89480, 89485,
    89490, 89495, 89500, 89505, 89510, 89515, 89519, 89524,
    89529, 89534, 89539, 89544, 89549, 89554, 89559, 89564,
    89569, 89574, 89579, 89583, 89588, 89593, 89598, 89603,
    89608, 89613, 89618, 89623, 89628, 89633, 89638, 89643,
    89648, 89653, 89658, 89663, 89668, 89673, 89678, 89683,
    89688, 89693, 89698, 89703, 89708, 89713, 89718, 89723,
    89728, 89733, 89737, 89742, 89747, 89752, 89757, 89763,
    89768, 89773, 89778, 89783, 89788, 89793, 89798, 89803,
    89808, 89813, 89818, 89823, 89828, 89833, 89838, 89843,
    89848, 89853, 89858, 89863, 89868, 89873, 89878, 89883,
    89888, 89893, 89898, 89903, 89908, 89914, 89919, 89924,
    89929, 89934, 89939, 89944, 89949, 89954, 89959, 89964,
    89969, 89974, 89980, 89985, 89990, 89995, 90000, 90005,
    90010, 90015, 90020, 90025, 90031, 90036, 90041, 90046,
    90051, 90056, 90061, 90066, 90071, 90077, 90082, 90087,
    90092, 90097, 90102, 90107, 90112, 90118, 90123, 90128,
    90133, 90138, 90143, 90149, 90154, 90159, 90164, 90169,
    90174, 90179, 90185, 90190, 90195, 90200, 90205, 90211,
    90216, 90221, 90226, 90231, 90236, 90242, 90247, 90252,
    90257, 90262, 90268, 90273, 90278, 90283, 90288, 90294,
    90299, 90304, 90309, 90315, 90320, 90325, 90330, 90335,
    90341, 90346, 90351, 90356, 90362, 90367, 90372, 90377,
    90383, 90388, 90393, 90398, 90404, 90409, 90414, 90419,
    90425, 90430, 90435, 90440, 90446, 90451, 90456, 90462,
    90467, 90472, 90477, 90483, 90488, 90493, 90499, 90504,
    90509, 90515, 90520, 90525, 90530, 90536, 90541, 90546,
    90552, 90557, 90562, 90568, 90573, 90578, 90584, 90589,
    90594, 90600, 90605, 90610, 90616, 90621, 90626, 90632,
    90637, 90642, 90648, 90653, 90659, 90664, 90669, 90675,
    90680, 90685, 90691, 90696, 90702, 90707, 90712, 90718,
    90723, 90729, 90734, 90739, 90745, 90750, 90756, 90761,
    90766, 90772, 90777, 90783, 90788, 90793, 90799, 90804,
    90810, 90815, 90821, 90826, 90832, 90837, 90842, 90848,
    90853, 90859, 90864, 90870, 90875, 90881, 90886, 90892,
    90897, 90902, 90908, 90913, 90919, 90924, 90930, 90935,
    90941, 90946, 90952, 90957, 90963, 90968, 90974, 90979,
    90985, 90990, 90996, 91001, 91007, 91012, 91018, 91023,
    91029, 91035, 91040, 91046, 91051, 91057, 91062, 91068,
    91073, 91079, 91084, 91090, 91096, 91101, 91107, 91112,
    91118, 91123, 91129, 91135, 91140, 91146, 91151, 91157,
    91162, 91168, 91174, 91179, 91185, 91190, 91196, 91202,
    91207, 91213, 91219, 91224, 91230, 91235, 91241, 91247,
    91252, 91258, 91264, 91269, 91275, 91281, 91286, 91292,
    91297, 91303, 91309, 91314, 91320, 91326, 91331, 91337,
    91343, 91349, 91354, 91360, 91366, 91371, 91377, 91383,
    91388, 91394, 91400, 91405, 91411, 91417, 91423, 91428,
    91434, 91440, 91446, 91451, 91457, 91463, 91468, 91474,
    91480, 91486, 91491, 91497, 91503, 91509, 91514, 91520,
    91526, 91532, 91538, 91543, 91549, 91555, 91561, 91566,
    91572, 91578, 91584, 91590, 91595, 91601, 91607, 91613,
    91619, 91624, 91630, 91636, 91642, 91648, 91654, 91659,
    91665, 91671, 91677, 91683, 91689, 91695, 91700, 91706,
    91712, 91718, 91724, 91730, 91736, 91741, 91747, 91753,
    91759, 91765, 91771, 91777, 91783, 91789, 91795, 91800,
    91806, 91812, 91818, 91824, 91830, 91836, 91842, 91848,
    91854, 91860, 91866, 91872, 91878, 91883, 91889, 91895,
    91901, 91907, 91913, 91919, 91925, 91931, 91937, 91943,
    91949, 91955, 91961, 91967, 91973, 91979, 91985, 91991,
    91997, 92003, 92009, 92015, 92021, 92027, 92033, 92039,
    92045, 92051, 92057, 92064, 92070, 92076, 92082, 92088,
    92094, 92100, 92106, 92112, 92118, 92124, 92130, 92136,
    92142, 92149, 92155, 92161, 92167, 92173, 92179, 92185,
    92191, 92197, 92204, 92210, 92216, 92222, 92228, 92234,
    92240, 92247, 92253, 92259, 92265, 92271, 92277, 92284,
    92290, 92296, 92302, 92308, 92315, 92321, 92327, 92333,
    92339, 92346, 92352, 92358, 92364, 92370, 92377, 92383,
    92389, 92395, 92402, 92408, 92414, 92420, 92427, 92433,
    92439, 92445, 92452, 92458, 92464, 92470, 92477, 92483,
    92489, 92496, 92502, 92508, 92515, 92521, 92527, 92533,
    92540, 92546, 92552, 92559, 92565, 92572, 92578, 92584,
    92591, 92597, 92603, 92610, 92616, 92622, 92629, 92635,
    92642, 92648, 92654, 92661, 92667, 92674, 92680, 92686,
    92693, 92699, 92706, 92712, 92718, 92725, 92731, 92738,
    92744, 92751, 92757, 92764, 92770, 92777, 92783, 92790,
    92796, 92802, 92809, 92815, 92822, 92828, 92835, 92841,
    92848, 92855, 92861, 92868, 92874, 92881, 92887, 92894,
    92900, 92907, 92913, 92920, 92927, 92933, 92940, 92946,
    92953, 92959, 92966, 92973, 92979, 92986, 92992, 92999,
    93006, 93012, 93019, 93026, 93032, 93039, 93045, 93052,
    93059, 93065, 93072, 93079, 93085, 93092, 93099, 93105,
    93112, 93119, 93126, 93132, 93139, 93146, 93152, 93159,
    93166, 93173, 93179, 93186, 93193, 93200, 93206, 93213,
    93220, 93227, 93233, 93240, 93247, 93254, 93260, 93267,
    93274, 93281, 93288, 93294, 93301, 93308, 93315, 93322,
    93329, 93335, 93342, 93349, 93356, 93363, 93370, 93377,
    93383, 93390, 93397, 93404, 93411, 93418, 93425, 93432,
    93439, 93446, 93453, 93459, 93466, 93473, 93480, 93487,
    93494, 93501, 93508, 93515, 93522, 93529, 93536, 93543,
    93550, 93557, 93564, 93571, 93578, 93585, 93592, 93599,
    93606, 93613, 93620, 93627, 93634, 93642, 93649, 93656,
    93663, 93670, 93677, 93684, 93691, 93698, 93705, 93712,
    93720, 93727, 93734, 93741, 93748, 93755, 93762, 93770,
    93777, 93784, 93791, 93798, 93806, 93813, 93820, 93827,
    93834, 93842, 93849, 93856, 93863, 93871, 93878, 93885,
    93892, 93900, 93907, 93914, 93921, 93929, 93936, 93943,
    93951, 93958, 93965, 93973, 93980, 93987, 93995, 94002,
    94009, 94017, 94024, 94031, 94039, 94046, 94054, 94061,
    94068, 94076, 94083, 94091, 94098, 94105, 94113, 94120,
    94128, 94135, 94143, 94150, 94158, 94165, 94173, 94180,
    94188, 94195, 94203, 94210, 94218, 94225, 94233, 94240,
    94248, 94255, 94263, 94271, 94278, 94286, 94293, 94301,
    94309, 94316, 94324, 94331, 94339, 94347, 94354, 94362,
    94370, 94377, 94385, 94393, 94400, 94408, 94416, 94424,
    94431, 94439, 94447, 94454, 94462, 94470, 94478, 94485,
    94493, 94501, 94509, 94517, 94524, 94532, 94540, 94548,
    94556, 94564, 94571, 94579, 94587, 94595, 94603, 94611,
    94619, 94626, 94634, 94642, 94650, 94658, 94666, 94674,
    94682, 94690, 94698, 94706, 94714, 94722, 94730, 94738,
    94746, 94754, 94762, 94770, 94778, 94786, 94794, 94802,
    94810, 94818, 94826, 94835, 94843, 94851, 94859, 94867,
    94875, 94883, 94891, 94900, 94908, 94916, 94924, 94932,
    94941, 94949, 94957, 94965, 94973, 94982, 94990, 94998,
    95006, 95015, 95023, 95031, 95040, 95048, 95056, 95065,
    95073, 95081, 95090, 95098, 95106, 95115, 95123, 95132,
    95140, 95148, 95157, 95165, 95174, 95182, 95191, 95199,
    95208, 95216, 95225, 95233, 95242, 95250, 95259, 95267,
    95276, 95284, 95293, 95302, 95310, 95319, 95327, 95336,
    95345, 95353, 95362, 95371, 95379, 95388, 95397, 95406,
    95414, 95423, 95432, 95440, 95449, 95458, 95467, 95476,
    95484, 95493, 95502, 95511, 95520, 95529, 95537, 95546,
    95555, 95564, 95573, 95582, 95591, 95600, 95609, 95618,
    95627, 95636, 95645, 95654, 95663, 95672, 95681, 95690,
    95699, 95708, 95717, 95726, 95735, 95744, 95753, 95762,
    95772, 95781, 95790, 95799, 95808, 95818, 95827, 95836,
    95845, 95855, 95864, 95873, 95882, 95892, 95901, 95910,
    95920, 95929, 95938, 95948, 95957, 95967, 95976, 95985,
    95995, 96004, 96014, 96023, 96033, 96042, 96052, 96061,
    96071, 96080, 96090, 96100, 96109, 96119, 96128, 96138,
    96148, 96157, 96167, 96177, 96186, 96196, 96206, 96216,
    96225, 96235, 96245, 96255, 96265, 96274, 96284, 96294,
    96304, 96314, 96324, 96334, 96344, 96354, 96364, 96374,
    96384, 96394, 96404, 96414, 96424, 96434, 96444, 96454,
    96464, 96474, 96485, 96495, 96505, 96515, 96525, 96536,
    96546, 96556, 96566, 96577, 96587, 96597, 96608, 96618,
    96628, 96639, 96649, 96660, 96670, 96681, 96691, 96702,
    96712, 96723, 96733, 96744, 96754, 96765, 96776, 96786,
    96797, 96808, 96818, 96829, 96840, 96851, 96861, 96872,
    96883, 96894, 96905, 96916, 96926, 96937, 96948, 96959,
    96970, 96981, 96992, 97003, 97014, 97025, 97037, 97048,
    97059, 97070, 97081, 97092, 97104, 97115, 97126, 97137,
    97149, 97160, 97171, 97183, 97194, 97206, 97217, 97229,
    97240, 97252, 97263, 97275, 97286, 97298, 97309, 97321,
    97333, 97345, 97356, 97368, 97380, 97392, 97403, 97415,
    97427, 97439, 97451, 97463, 97475, 97487, 97499, 97511,
    97523, 97535, 97547, 97560, 97572, 97584, 97596, 97609,
    97621, 97633, 97646, 97658, 97670, 97683, 97695, 97708,
    97720, 97733, 97746, 97758, 97771, 97784, 97796, 97809,
    97822, 97835, 97848, 97860, 97873, 97886, 97899, 97912,
    97925, 97939, 97952, 97965, 97978, 97991, 98004, 98018,
    98031, 98044, 98058, 98071, 98085, 98098, 98112, 98126,
    98139, 98153, 98167, 98180, 98194, 98208, 98222, 98236,
    98250, 98264, 98278, 98292, 98306, 98320, 98334, 98349,
    98363, 98377, 98392, 98406, 98420, 98435, 98450, 98464,
    98479, 98494, 98508, 98523, 98538, 98553, 98568, 98583,
    98598, 98613, 98628, 98643, 98659, 98674, 98689, 98705,
    98720, 98736, 98752, 98767, 98783, 98799, 98815, 98831,
    98847, 98863, 98879, 98895, 98911, 98927, 98944, 98960,
    98977, 98993, 99010, 99027, 99043, 99060, 99077, 99094,
    99111, 99128, 99146, 99163, 99180, 99198, 99215, 99233,
    99251, 99268, 99286, 99304, 99322, 99341, 99359, 99377,
    99396, 99414, 99433, 99451, 99470, 99489, 99508, 99527,
    99547, 99566, 99585, 99605, 99625, 99645, 99664, 99685,
    99705, 99725, 99745, 99766, 99787, 99808, 99829, 99850,
    99871, 99892, 99914, 99936, 99958, 99980, 100002, 100024,
    100047, 100069, 100092, 100115, 100139, 100162, 100186, 100210,
    100234, 100258, 100283, 100307, 100332, 100358, 100383, 100409,
    100435, 100461, 100488, 100514, 100542, 100569, 100597, 100625,
    100653, 100682, 100711, 100741, 100771, 100801, 100832, 100863,
    100895, 100927, 100960, 100993, 101027, 101062, 101097, 101133,
    101170, 101207, 101245, 101284, 101324, 101365, 101407, 101450,
    101495, 101541, 101589, 101638, 101689, 101742, 101798, 101857,
    101919, 101985, 102056, 102134, 102219, 102316, 102431, 102581,
    102943,
];
