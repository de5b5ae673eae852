// Built-in reference territory: the seven regions of Kosovo and their
// municipalities. Boundaries are simplified outlines in image-map `coords`
// form, in map pixels.

pub(crate) struct SubdivisionSeed {
    pub id: &'static str,
    pub color: &'static str,
    pub name: &'static str,
}

pub(crate) struct MunicipalitySeed {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub coords: &'static str,
}

pub(crate) const SUBDIVISIONS: &[SubdivisionSeed] = &[
    SubdivisionSeed { id: "Prishtina", color: "#8B0000", name: "RAJONI I PRISHTINËS" },
    SubdivisionSeed { id: "Mitrovica", color: "#FF8C00", name: "RAJONI I MITROVICËS" },
    SubdivisionSeed { id: "Peja", color: "#FFD700", name: "RAJONI I PEJËS" },
    SubdivisionSeed { id: "Prizren", color: "#87CEEB", name: "RAJONI I PRIZRENIT" },
    SubdivisionSeed { id: "Ferizaj", color: "#00008B", name: "RAJONI I FERIZAJT" },
    SubdivisionSeed { id: "Gjilan", color: "#800080", name: "RAJONI I GJILANIT" },
    SubdivisionSeed { id: "Gjakova", color: "#228B22", name: "RAJONI I GJAKOVËS" },
];

pub(crate) const MUNICIPALITIES: &[MunicipalitySeed] = &[
    MunicipalitySeed { id: "Pristina", name: "Prishtinë", region: "Prishtina", coords: "780,562,768,588,745,600,721,594,708,568,720,542,745,520,768,536" },
    MunicipalitySeed { id: "Podujevo", name: "Podujevë", region: "Prishtina", coords: "830,346,804,382,763,389,730,376,722,348,724,304,764,289,805,309" },
    MunicipalitySeed { id: "Obiliq", name: "Obiliq", region: "Prishtina", coords: "693,533,689,547,671,557,655,552,649,533,655,513,670,508,692,514" },
    MunicipalitySeed { id: "FusheKosove", name: "Fushë Kosovë", region: "Prishtina", coords: "705,591,696,605,685,614,671,607,662,593,670,574,687,570,701,575" },
    MunicipalitySeed { id: "Lipjan", name: "Lipjan", region: "Prishtina", coords: "753,698,745,730,717,736,692,728,673,695,695,671,716,658,740,668" },
    MunicipalitySeed { id: "Drenas", name: "Gllogoc", region: "Prishtina", coords: "601,596,601,624,573,632,541,629,533,602,540,568,573,557,594,572" },
    MunicipalitySeed { id: "Gracanice", name: "Graçanicë", region: "Prishtina", coords: "799,622,786,638,776,643,760,639,755,623,758,610,774,601,792,609" },
    MunicipalitySeed { id: "Mitrovica", name: "Mitrovicë", region: "Mitrovica", coords: "619,402,605,420,586,434,564,423,561,403,565,382,586,377,606,382" },
    MunicipalitySeed { id: "MitrovicaNorth", name: "Mitrovicë e Veriut", region: "Mitrovica", coords: "589,356,587,365,577,371,565,371,562,356,565,347,576,343,590,345" },
    MunicipalitySeed { id: "Vushtrri", name: "Vushtrri", region: "Mitrovica", coords: "674,451,663,470,641,482,617,470,601,456,619,430,640,423,668,423" },
    MunicipalitySeed { id: "Skenderaj", name: "Skënderaj", region: "Mitrovica", coords: "536,488,522,510,496,529,461,515,456,485,461,447,497,439,527,455" },
    MunicipalitySeed { id: "Zvecan", name: "Zveçan", region: "Mitrovica", coords: "535,318,526,333,514,341,495,338,489,317,495,298,514,298,526,304" },
    MunicipalitySeed { id: "ZubinPotok", name: "Zubin Potok", region: "Mitrovica", coords: "422,350,418,388,381,395,349,385,339,357,354,316,387,310,415,317" },
    MunicipalitySeed { id: "Leposaviq", name: "Leposaviq", region: "Mitrovica", coords: "559,162,531,204,501,226,464,196,452,168,461,118,494,104,544,129" },
    MunicipalitySeed { id: "Peja", name: "Pejë", region: "Peja", coords: "222,564,204,592,167,617,133,605,118,567,144,533,170,521,206,528" },
    MunicipalitySeed { id: "Istog", name: "Istog", region: "Peja", coords: "340,449,337,481,302,491,267,483,254,452,272,422,301,417,326,425" },
    MunicipalitySeed { id: "Kline", name: "Klinë", region: "Peja", coords: "397,610,385,638,356,651,334,641,320,614,331,592,356,583,385,592" },
    MunicipalitySeed { id: "Gjakova", name: "Gjakovë", region: "Gjakova", coords: "317,813,296,845,268,856,236,845,224,812,233,776,271,762,300,787" },
    MunicipalitySeed { id: "Decan", name: "Deçan", region: "Gjakova", coords: "220,673,199,696,182,707,159,697,142,676,153,642,176,635,202,652" },
    MunicipalitySeed { id: "Junik", name: "Junik", region: "Gjakova", coords: "191,740,186,750,173,754,159,749,158,739,162,728,172,723,182,729" },
    MunicipalitySeed { id: "Rahovec", name: "Rahovec", region: "Gjakova", coords: "436,779,428,798,402,812,379,809,365,776,380,760,399,743,422,758" },
    MunicipalitySeed { id: "Prizren", name: "Prizren", region: "Prizren", coords: "536,942,509,977,485,999,442,979,439,947,448,908,474,887,519,906" },
    MunicipalitySeed { id: "Dragash", name: "Dragash", region: "Prizren", coords: "465,1118,455,1155,416,1165,380,1159,378,1126,388,1095,412,1085,441,1093" },
    MunicipalitySeed { id: "Suhareke", name: "Suharekë", region: "Prizren", coords: "577,819,565,844,544,851,524,841,515,822,520,793,541,785,567,801" },
    MunicipalitySeed { id: "Malisheve", name: "Malishevë", region: "Prizren", coords: "504,708,498,730,474,736,447,730,439,707,452,681,473,676,491,684" },
    MunicipalitySeed { id: "Mamushe", name: "Mamushë", region: "Prizren", coords: "467,851,462,860,456,866,445,861,444,853,446,845,453,841,463,843" },
    MunicipalitySeed { id: "Ferizaj", name: "Ferizaj", region: "Ferizaj", coords: "771,808,767,831,738,837,715,830,701,804,709,781,732,772,757,777" },
    MunicipalitySeed { id: "Shtime", name: "Shtime", region: "Ferizaj", coords: "674,744,670,762,652,772,633,764,624,745,636,730,655,724,673,728" },
    MunicipalitySeed { id: "Kacanik", name: "Kaçanik", region: "Ferizaj", coords: "833,923,820,950,798,959,781,949,767,927,779,902,801,893,823,905" },
    MunicipalitySeed { id: "Shterpce", name: "Shtërpcë", region: "Ferizaj", coords: "680,917,677,939,656,955,628,943,618,917,633,899,655,882,677,895" },
    MunicipalitySeed { id: "HaniElezit", name: "Hani i Elezit", region: "Ferizaj", coords: "852,1001,848,1011,840,1015,828,1010,820,999,828,990,838,984,851,990" },
    MunicipalitySeed { id: "Gjilan", name: "Gjilan", region: "Gjilan", coords: "964,731,959,750,932,762,914,750,902,733,909,702,936,697,959,705" },
    MunicipalitySeed { id: "Kamenice", name: "Kamenicë", region: "Gjilan", coords: "1059,615,1047,643,1019,662,999,647,976,611,997,589,1021,568,1052,583" },
    MunicipalitySeed { id: "Viti", name: "Viti", region: "Gjilan", coords: "910,850,895,875,874,886,849,876,839,855,857,833,873,820,898,831" },
    MunicipalitySeed { id: "Novoberde", name: "Novobërdë", region: "Gjilan", coords: "928,596,925,619,906,628,884,614,873,596,886,579,902,572,925,581" },
    MunicipalitySeed { id: "Ranillug", name: "Ranillug", region: "Gjilan", coords: "1039,705,1034,714,1026,723,1012,719,1010,706,1014,695,1023,687,1037,694" },
    MunicipalitySeed { id: "Partesh", name: "Partesh", region: "Gjilan", coords: "935,779,929,788,921,789,913,787,909,778,914,772,923,769,929,771" },
    MunicipalitySeed { id: "Kllokot", name: "Kllokot", region: "Gjilan", coords: "881,811,876,819,870,821,864,818,862,812,862,804,870,803,879,805" },
];
