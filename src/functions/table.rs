// The declarative function table. One row per engine entry point: variant, method,
// engine name, compute and lookback symbols, group, description, then inputs,
// optional parameters (`name: kind = default => [min, max]`) and outputs

/// Expands `$callback!` with every row of the function table.
macro_rules! for_each_function {
    ($callback:ident) => {
        $callback! {
            {
                Acos, acos, "ACOS", TA_ACOS, TA_ACOS_Lookback, MathTransform, "Vector Trigonometric ACos",
                [real],
                [],
                [out_real: Real],
            },
            {
                Ad, ad, "AD", TA_AD, TA_AD_Lookback, Volume, "Chaikin A/D Line",
                [high, low, close, volume],
                [],
                [out_real: Real],
            },
            {
                Add, add, "ADD", TA_ADD, TA_ADD_Lookback, MathOperator, "Vector Arithmetic Add",
                [real0, real1],
                [],
                [out_real: Real],
            },
            {
                AdOsc, adosc, "ADOSC", TA_ADOSC, TA_ADOSC_Lookback, Volume, "Chaikin A/D Oscillator",
                [high, low, close, volume],
                [fast_period: Int = 3 => [2, 100000], slow_period: Int = 10 => [2, 100000]],
                [out_real: Real],
            },
            {
                Adx, adx, "ADX", TA_ADX, TA_ADX_Lookback, Momentum, "Average Directional Movement Index",
                [high, low, close],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Adxr, adxr, "ADXR", TA_ADXR, TA_ADXR_Lookback, Momentum, "Average Directional Movement Index Rating",
                [high, low, close],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Apo, apo, "APO", TA_APO, TA_APO_Lookback, Momentum, "Absolute Price Oscillator",
                [real],
                [fast_period: Int = 12 => [2, 100000], slow_period: Int = 26 => [2, 100000], ma_type: MaType = 0 => [0, 8]],
                [out_real: Real],
            },
            {
                Aroon, aroon, "AROON", TA_AROON, TA_AROON_Lookback, Momentum, "Aroon",
                [high, low],
                [time_period: Int = 14 => [2, 100000]],
                [out_aroon_down: Real, out_aroon_up: Real],
            },
            {
                AroonOsc, aroonosc, "AROONOSC", TA_AROONOSC, TA_AROONOSC_Lookback, Momentum, "Aroon Oscillator",
                [high, low],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Asin, asin, "ASIN", TA_ASIN, TA_ASIN_Lookback, MathTransform, "Vector Trigonometric ASin",
                [real],
                [],
                [out_real: Real],
            },
            {
                Atan, atan, "ATAN", TA_ATAN, TA_ATAN_Lookback, MathTransform, "Vector Trigonometric ATan",
                [real],
                [],
                [out_real: Real],
            },
            {
                Atr, atr, "ATR", TA_ATR, TA_ATR_Lookback, Volatility, "Average True Range",
                [high, low, close],
                [time_period: Int = 14 => [1, 100000]],
                [out_real: Real],
            },
            {
                AvgPrice, avgprice, "AVGPRICE", TA_AVGPRICE, TA_AVGPRICE_Lookback, PriceTransform, "Average Price",
                [open, high, low, close],
                [],
                [out_real: Real],
            },
            {
                Bbands, bbands, "BBANDS", TA_BBANDS, TA_BBANDS_Lookback, OverlapStudies, "Bollinger Bands",
                [real],
                [time_period: Int = 5 => [2, 100000], nb_dev_up: Real = 2.0 => [-3e37, 3e37], nb_dev_dn: Real = 2.0 => [-3e37, 3e37], ma_type: MaType = 0 => [0, 8]],
                [out_real_upper_band: Real, out_real_middle_band: Real, out_real_lower_band: Real],
            },
            {
                Beta, beta, "BETA", TA_BETA, TA_BETA_Lookback, Statistic, "Beta",
                [real0, real1],
                [time_period: Int = 5 => [1, 100000]],
                [out_real: Real],
            },
            {
                Bop, bop, "BOP", TA_BOP, TA_BOP_Lookback, Momentum, "Balance Of Power",
                [open, high, low, close],
                [],
                [out_real: Real],
            },
            {
                Cci, cci, "CCI", TA_CCI, TA_CCI_Lookback, Momentum, "Commodity Channel Index",
                [high, low, close],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Cdl2Crows, cdl2crows, "CDL2CROWS", TA_CDL2CROWS, TA_CDL2CROWS_Lookback, PatternRecognition, "Two Crows",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Cdl3BlackCrows, cdl3blackcrows, "CDL3BLACKCROWS", TA_CDL3BLACKCROWS, TA_CDL3BLACKCROWS_Lookback, PatternRecognition, "Three Black Crows",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Cdl3Inside, cdl3inside, "CDL3INSIDE", TA_CDL3INSIDE, TA_CDL3INSIDE_Lookback, PatternRecognition, "Three Inside Up/Down",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Cdl3LineStrike, cdl3linestrike, "CDL3LINESTRIKE", TA_CDL3LINESTRIKE, TA_CDL3LINESTRIKE_Lookback, PatternRecognition, "Three-Line Strike",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Cdl3Outside, cdl3outside, "CDL3OUTSIDE", TA_CDL3OUTSIDE, TA_CDL3OUTSIDE_Lookback, PatternRecognition, "Three Outside Up/Down",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Cdl3StarsInSouth, cdl3starsinsouth, "CDL3STARSINSOUTH", TA_CDL3STARSINSOUTH, TA_CDL3STARSINSOUTH_Lookback, PatternRecognition, "Three Stars In The South",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Cdl3WhiteSoldiers, cdl3whitesoldiers, "CDL3WHITESOLDIERS", TA_CDL3WHITESOLDIERS, TA_CDL3WHITESOLDIERS_Lookback, PatternRecognition, "Three Advancing White Soldiers",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlAbandonedBaby, cdlabandonedbaby, "CDLABANDONEDBABY", TA_CDLABANDONEDBABY, TA_CDLABANDONEDBABY_Lookback, PatternRecognition, "Abandoned Baby",
                [open, high, low, close],
                [penetration: Real = 0.3 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlAdvanceBlock, cdladvanceblock, "CDLADVANCEBLOCK", TA_CDLADVANCEBLOCK, TA_CDLADVANCEBLOCK_Lookback, PatternRecognition, "Advance Block",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlBelthold, cdlbelthold, "CDLBELTHOLD", TA_CDLBELTHOLD, TA_CDLBELTHOLD_Lookback, PatternRecognition, "Belt-hold",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlBreakaway, cdlbreakaway, "CDLBREAKAWAY", TA_CDLBREAKAWAY, TA_CDLBREAKAWAY_Lookback, PatternRecognition, "Breakaway",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlClosingMarubozu, cdlclosingmarubozu, "CDLCLOSINGMARUBOZU", TA_CDLCLOSINGMARUBOZU, TA_CDLCLOSINGMARUBOZU_Lookback, PatternRecognition, "Closing Marubozu",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlConcealBabySwall, cdlconcealbabyswall, "CDLCONCEALBABYSWALL", TA_CDLCONCEALBABYSWALL, TA_CDLCONCEALBABYSWALL_Lookback, PatternRecognition, "Concealing Baby Swallow",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlCounterattack, cdlcounterattack, "CDLCOUNTERATTACK", TA_CDLCOUNTERATTACK, TA_CDLCOUNTERATTACK_Lookback, PatternRecognition, "Counterattack",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlDarkCloudCover, cdldarkcloudcover, "CDLDARKCLOUDCOVER", TA_CDLDARKCLOUDCOVER, TA_CDLDARKCLOUDCOVER_Lookback, PatternRecognition, "Dark Cloud Cover",
                [open, high, low, close],
                [penetration: Real = 0.5 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlDoji, cdldoji, "CDLDOJI", TA_CDLDOJI, TA_CDLDOJI_Lookback, PatternRecognition, "Doji",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlDojiStar, cdldojistar, "CDLDOJISTAR", TA_CDLDOJISTAR, TA_CDLDOJISTAR_Lookback, PatternRecognition, "Doji Star",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlDragonflyDoji, cdldragonflydoji, "CDLDRAGONFLYDOJI", TA_CDLDRAGONFLYDOJI, TA_CDLDRAGONFLYDOJI_Lookback, PatternRecognition, "Dragonfly Doji",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlEngulfing, cdlengulfing, "CDLENGULFING", TA_CDLENGULFING, TA_CDLENGULFING_Lookback, PatternRecognition, "Engulfing Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlEveningDojiStar, cdleveningdojistar, "CDLEVENINGDOJISTAR", TA_CDLEVENINGDOJISTAR, TA_CDLEVENINGDOJISTAR_Lookback, PatternRecognition, "Evening Doji Star",
                [open, high, low, close],
                [penetration: Real = 0.3 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlEveningStar, cdleveningstar, "CDLEVENINGSTAR", TA_CDLEVENINGSTAR, TA_CDLEVENINGSTAR_Lookback, PatternRecognition, "Evening Star",
                [open, high, low, close],
                [penetration: Real = 0.3 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlGapSidesideWhite, cdlgapsidesidewhite, "CDLGAPSIDESIDEWHITE", TA_CDLGAPSIDESIDEWHITE, TA_CDLGAPSIDESIDEWHITE_Lookback, PatternRecognition, "Up/Down-gap side-by-side white lines",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlGravestoneDoji, cdlgravestonedoji, "CDLGRAVESTONEDOJI", TA_CDLGRAVESTONEDOJI, TA_CDLGRAVESTONEDOJI_Lookback, PatternRecognition, "Gravestone Doji",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHammer, cdlhammer, "CDLHAMMER", TA_CDLHAMMER, TA_CDLHAMMER_Lookback, PatternRecognition, "Hammer",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHangingMan, cdlhangingman, "CDLHANGINGMAN", TA_CDLHANGINGMAN, TA_CDLHANGINGMAN_Lookback, PatternRecognition, "Hanging Man",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHarami, cdlharami, "CDLHARAMI", TA_CDLHARAMI, TA_CDLHARAMI_Lookback, PatternRecognition, "Harami Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHaramiCross, cdlharamicross, "CDLHARAMICROSS", TA_CDLHARAMICROSS, TA_CDLHARAMICROSS_Lookback, PatternRecognition, "Harami Cross Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHighWave, cdlhighwave, "CDLHIGHWAVE", TA_CDLHIGHWAVE, TA_CDLHIGHWAVE_Lookback, PatternRecognition, "High-Wave Candle",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHikkake, cdlhikkake, "CDLHIKKAKE", TA_CDLHIKKAKE, TA_CDLHIKKAKE_Lookback, PatternRecognition, "Hikkake Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHikkakeMod, cdlhikkakemod, "CDLHIKKAKEMOD", TA_CDLHIKKAKEMOD, TA_CDLHIKKAKEMOD_Lookback, PatternRecognition, "Modified Hikkake Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlHomingPigeon, cdlhomingpigeon, "CDLHOMINGPIGEON", TA_CDLHOMINGPIGEON, TA_CDLHOMINGPIGEON_Lookback, PatternRecognition, "Homing Pigeon",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlIdentical3Crows, cdlidentical3crows, "CDLIDENTICAL3CROWS", TA_CDLIDENTICAL3CROWS, TA_CDLIDENTICAL3CROWS_Lookback, PatternRecognition, "Identical Three Crows",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlInNeck, cdlinneck, "CDLINNECK", TA_CDLINNECK, TA_CDLINNECK_Lookback, PatternRecognition, "In-Neck Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlInvertedHammer, cdlinvertedhammer, "CDLINVERTEDHAMMER", TA_CDLINVERTEDHAMMER, TA_CDLINVERTEDHAMMER_Lookback, PatternRecognition, "Inverted Hammer",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlKicking, cdlkicking, "CDLKICKING", TA_CDLKICKING, TA_CDLKICKING_Lookback, PatternRecognition, "Kicking",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlKickingByLength, cdlkickingbylength, "CDLKICKINGBYLENGTH", TA_CDLKICKINGBYLENGTH, TA_CDLKICKINGBYLENGTH_Lookback, PatternRecognition, "Kicking - bull/bear determined by the longer marubozu",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlLadderBottom, cdlladderbottom, "CDLLADDERBOTTOM", TA_CDLLADDERBOTTOM, TA_CDLLADDERBOTTOM_Lookback, PatternRecognition, "Ladder Bottom",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlLongLeggedDoji, cdllongleggeddoji, "CDLLONGLEGGEDDOJI", TA_CDLLONGLEGGEDDOJI, TA_CDLLONGLEGGEDDOJI_Lookback, PatternRecognition, "Long Legged Doji",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlLongLine, cdllongline, "CDLLONGLINE", TA_CDLLONGLINE, TA_CDLLONGLINE_Lookback, PatternRecognition, "Long Line Candle",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlMarubozu, cdlmarubozu, "CDLMARUBOZU", TA_CDLMARUBOZU, TA_CDLMARUBOZU_Lookback, PatternRecognition, "Marubozu",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlMatchingLow, cdlmatchinglow, "CDLMATCHINGLOW", TA_CDLMATCHINGLOW, TA_CDLMATCHINGLOW_Lookback, PatternRecognition, "Matching Low",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlMatHold, cdlmathold, "CDLMATHOLD", TA_CDLMATHOLD, TA_CDLMATHOLD_Lookback, PatternRecognition, "Mat Hold",
                [open, high, low, close],
                [penetration: Real = 0.5 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlMorningDojiStar, cdlmorningdojistar, "CDLMORNINGDOJISTAR", TA_CDLMORNINGDOJISTAR, TA_CDLMORNINGDOJISTAR_Lookback, PatternRecognition, "Morning Doji Star",
                [open, high, low, close],
                [penetration: Real = 0.3 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlMorningStar, cdlmorningstar, "CDLMORNINGSTAR", TA_CDLMORNINGSTAR, TA_CDLMORNINGSTAR_Lookback, PatternRecognition, "Morning Star",
                [open, high, low, close],
                [penetration: Real = 0.3 => [0.0, 3e37]],
                [out_integer: Integer],
            },
            {
                CdlOnNeck, cdlonneck, "CDLONNECK", TA_CDLONNECK, TA_CDLONNECK_Lookback, PatternRecognition, "On-Neck Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlPiercing, cdlpiercing, "CDLPIERCING", TA_CDLPIERCING, TA_CDLPIERCING_Lookback, PatternRecognition, "Piercing Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlRickshawMan, cdlrickshawman, "CDLRICKSHAWMAN", TA_CDLRICKSHAWMAN, TA_CDLRICKSHAWMAN_Lookback, PatternRecognition, "Rickshaw Man",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlRiseFall3Methods, cdlrisefall3methods, "CDLRISEFALL3METHODS", TA_CDLRISEFALL3METHODS, TA_CDLRISEFALL3METHODS_Lookback, PatternRecognition, "Rising/Falling Three Methods",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlSeparatingLines, cdlseparatinglines, "CDLSEPARATINGLINES", TA_CDLSEPARATINGLINES, TA_CDLSEPARATINGLINES_Lookback, PatternRecognition, "Separating Lines",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlShootingStar, cdlshootingstar, "CDLSHOOTINGSTAR", TA_CDLSHOOTINGSTAR, TA_CDLSHOOTINGSTAR_Lookback, PatternRecognition, "Shooting Star",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlShortLine, cdlshortline, "CDLSHORTLINE", TA_CDLSHORTLINE, TA_CDLSHORTLINE_Lookback, PatternRecognition, "Short Line Candle",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlSpinningTop, cdlspinningtop, "CDLSPINNINGTOP", TA_CDLSPINNINGTOP, TA_CDLSPINNINGTOP_Lookback, PatternRecognition, "Spinning Top",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlStalledPattern, cdlstalledpattern, "CDLSTALLEDPATTERN", TA_CDLSTALLEDPATTERN, TA_CDLSTALLEDPATTERN_Lookback, PatternRecognition, "Stalled Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlStickSandwich, cdlsticksandwich, "CDLSTICKSANDWICH", TA_CDLSTICKSANDWICH, TA_CDLSTICKSANDWICH_Lookback, PatternRecognition, "Stick Sandwich",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlTakuri, cdltakuri, "CDLTAKURI", TA_CDLTAKURI, TA_CDLTAKURI_Lookback, PatternRecognition, "Takuri (Dragonfly Doji with very long lower shadow)",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlTasukiGap, cdltasukigap, "CDLTASUKIGAP", TA_CDLTASUKIGAP, TA_CDLTASUKIGAP_Lookback, PatternRecognition, "Tasuki Gap",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlThrusting, cdlthrusting, "CDLTHRUSTING", TA_CDLTHRUSTING, TA_CDLTHRUSTING_Lookback, PatternRecognition, "Thrusting Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlTristar, cdltristar, "CDLTRISTAR", TA_CDLTRISTAR, TA_CDLTRISTAR_Lookback, PatternRecognition, "Tristar Pattern",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlUnique3River, cdlunique3river, "CDLUNIQUE3RIVER", TA_CDLUNIQUE3RIVER, TA_CDLUNIQUE3RIVER_Lookback, PatternRecognition, "Unique 3 River",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlUpsideGap2Crows, cdlupsidegap2crows, "CDLUPSIDEGAP2CROWS", TA_CDLUPSIDEGAP2CROWS, TA_CDLUPSIDEGAP2CROWS_Lookback, PatternRecognition, "Upside Gap Two Crows",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                CdlXSideGap3Methods, cdlxsidegap3methods, "CDLXSIDEGAP3METHODS", TA_CDLXSIDEGAP3METHODS, TA_CDLXSIDEGAP3METHODS_Lookback, PatternRecognition, "Upside/Downside Gap Three Methods",
                [open, high, low, close],
                [],
                [out_integer: Integer],
            },
            {
                Ceil, ceil, "CEIL", TA_CEIL, TA_CEIL_Lookback, MathTransform, "Vector Ceil",
                [real],
                [],
                [out_real: Real],
            },
            {
                Cmo, cmo, "CMO", TA_CMO, TA_CMO_Lookback, Momentum, "Chande Momentum Oscillator",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Correl, correl, "CORREL", TA_CORREL, TA_CORREL_Lookback, Statistic, "Pearson's Correlation Coefficient (r)",
                [real0, real1],
                [time_period: Int = 30 => [1, 100000]],
                [out_real: Real],
            },
            {
                Cos, cos, "COS", TA_COS, TA_COS_Lookback, MathTransform, "Vector Trigonometric Cos",
                [real],
                [],
                [out_real: Real],
            },
            {
                Cosh, cosh, "COSH", TA_COSH, TA_COSH_Lookback, MathTransform, "Vector Trigonometric Cosh",
                [real],
                [],
                [out_real: Real],
            },
            {
                Dema, dema, "DEMA", TA_DEMA, TA_DEMA_Lookback, OverlapStudies, "Double Exponential Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                Div, div, "DIV", TA_DIV, TA_DIV_Lookback, MathOperator, "Vector Arithmetic Div",
                [real0, real1],
                [],
                [out_real: Real],
            },
            {
                Dx, dx, "DX", TA_DX, TA_DX_Lookback, Momentum, "Directional Movement Index",
                [high, low, close],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Ema, ema, "EMA", TA_EMA, TA_EMA_Lookback, OverlapStudies, "Exponential Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                Exp, exp, "EXP", TA_EXP, TA_EXP_Lookback, MathTransform, "Vector Arithmetic Exp",
                [real],
                [],
                [out_real: Real],
            },
            {
                Floor, floor, "FLOOR", TA_FLOOR, TA_FLOOR_Lookback, MathTransform, "Vector Floor",
                [real],
                [],
                [out_real: Real],
            },
            {
                HtDcPeriod, ht_dcperiod, "HT_DCPERIOD", TA_HT_DCPERIOD, TA_HT_DCPERIOD_Lookback, Cycle, "Hilbert Transform - Dominant Cycle Period",
                [real],
                [],
                [out_real: Real],
            },
            {
                HtDcPhase, ht_dcphase, "HT_DCPHASE", TA_HT_DCPHASE, TA_HT_DCPHASE_Lookback, Cycle, "Hilbert Transform - Dominant Cycle Phase",
                [real],
                [],
                [out_real: Real],
            },
            {
                HtPhasor, ht_phasor, "HT_PHASOR", TA_HT_PHASOR, TA_HT_PHASOR_Lookback, Cycle, "Hilbert Transform - Phasor Components",
                [real],
                [],
                [out_in_phase: Real, out_quadrature: Real],
            },
            {
                HtSine, ht_sine, "HT_SINE", TA_HT_SINE, TA_HT_SINE_Lookback, Cycle, "Hilbert Transform - SineWave",
                [real],
                [],
                [out_sine: Real, out_lead_sine: Real],
            },
            {
                HtTrendLine, ht_trendline, "HT_TRENDLINE", TA_HT_TRENDLINE, TA_HT_TRENDLINE_Lookback, OverlapStudies, "Hilbert Transform - Instantaneous Trendline",
                [real],
                [],
                [out_real: Real],
            },
            {
                HtTrendMode, ht_trendmode, "HT_TRENDMODE", TA_HT_TRENDMODE, TA_HT_TRENDMODE_Lookback, Cycle, "Hilbert Transform - Trend vs Cycle Mode",
                [real],
                [],
                [out_integer: Integer],
            },
            {
                Kama, kama, "KAMA", TA_KAMA, TA_KAMA_Lookback, OverlapStudies, "Kaufman Adaptive Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                LinearReg, linearreg, "LINEARREG", TA_LINEARREG, TA_LINEARREG_Lookback, Statistic, "Linear Regression",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                LinearRegAngle, linearreg_angle, "LINEARREG_ANGLE", TA_LINEARREG_ANGLE, TA_LINEARREG_ANGLE_Lookback, Statistic, "Linear Regression Angle",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                LinearRegIntercept, linearreg_intercept, "LINEARREG_INTERCEPT", TA_LINEARREG_INTERCEPT, TA_LINEARREG_INTERCEPT_Lookback, Statistic, "Linear Regression Intercept",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                LinearRegSlope, linearreg_slope, "LINEARREG_SLOPE", TA_LINEARREG_SLOPE, TA_LINEARREG_SLOPE_Lookback, Statistic, "Linear Regression Slope",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Ln, ln, "LN", TA_LN, TA_LN_Lookback, MathTransform, "Vector Log Natural",
                [real],
                [],
                [out_real: Real],
            },
            {
                Log10, log10, "LOG10", TA_LOG10, TA_LOG10_Lookback, MathTransform, "Vector Log10",
                [real],
                [],
                [out_real: Real],
            },
            {
                Ma, ma, "MA", TA_MA, TA_MA_Lookback, OverlapStudies, "Moving average",
                [real],
                [time_period: Int = 30 => [1, 100000], ma_type: MaType = 0 => [0, 8]],
                [out_real: Real],
            },
            {
                Macd, macd, "MACD", TA_MACD, TA_MACD_Lookback, Momentum, "Moving Average Convergence/Divergence",
                [real],
                [fast_period: Int = 12 => [2, 100000], slow_period: Int = 26 => [2, 100000], signal_period: Int = 9 => [1, 100000]],
                [out_macd: Real, out_macd_signal: Real, out_macd_hist: Real],
            },
            {
                MacdExt, macdext, "MACDEXT", TA_MACDEXT, TA_MACDEXT_Lookback, Momentum, "MACD with controllable MA type",
                [real],
                [fast_period: Int = 12 => [2, 100000], fast_ma_type: MaType = 0 => [0, 8], slow_period: Int = 26 => [2, 100000], slow_ma_type: MaType = 0 => [0, 8], signal_period: Int = 9 => [1, 100000], signal_ma_type: MaType = 0 => [0, 8]],
                [out_macd: Real, out_macd_signal: Real, out_macd_hist: Real],
            },
            {
                MacdFix, macdfix, "MACDFIX", TA_MACDFIX, TA_MACDFIX_Lookback, Momentum, "Moving Average Convergence/Divergence Fix 12/26",
                [real],
                [signal_period: Int = 9 => [1, 100000]],
                [out_macd: Real, out_macd_signal: Real, out_macd_hist: Real],
            },
            {
                Mama, mama, "MAMA", TA_MAMA, TA_MAMA_Lookback, OverlapStudies, "MESA Adaptive Moving Average",
                [real],
                [fast_limit: Real = 0.5 => [0.01, 0.99], slow_limit: Real = 0.05 => [0.01, 0.99]],
                [out_mama: Real, out_fama: Real],
            },
            {
                Mavp, mavp, "MAVP", TA_MAVP, TA_MAVP_Lookback, OverlapStudies, "Moving average with variable period",
                [real, periods],
                [min_period: Int = 2 => [2, 100000], max_period: Int = 30 => [2, 100000], ma_type: MaType = 0 => [0, 8]],
                [out_real: Real],
            },
            {
                Max, max, "MAX", TA_MAX, TA_MAX_Lookback, MathOperator, "Highest value over a specified period",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                MaxIndex, maxindex, "MAXINDEX", TA_MAXINDEX, TA_MAXINDEX_Lookback, MathOperator, "Index of highest value over a specified period",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_integer: Integer],
            },
            {
                MedPrice, medprice, "MEDPRICE", TA_MEDPRICE, TA_MEDPRICE_Lookback, PriceTransform, "Median Price",
                [high, low],
                [],
                [out_real: Real],
            },
            {
                Mfi, mfi, "MFI", TA_MFI, TA_MFI_Lookback, Momentum, "Money Flow Index",
                [high, low, close, volume],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                MidPoint, midpoint, "MIDPOINT", TA_MIDPOINT, TA_MIDPOINT_Lookback, OverlapStudies, "MidPoint over period",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                MidPrice, midprice, "MIDPRICE", TA_MIDPRICE, TA_MIDPRICE_Lookback, OverlapStudies, "Midpoint Price over period",
                [high, low],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Min, min, "MIN", TA_MIN, TA_MIN_Lookback, MathOperator, "Lowest value over a specified period",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                MinIndex, minindex, "MININDEX", TA_MININDEX, TA_MININDEX_Lookback, MathOperator, "Index of lowest value over a specified period",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_integer: Integer],
            },
            {
                MinMax, minmax, "MINMAX", TA_MINMAX, TA_MINMAX_Lookback, MathOperator, "Lowest and highest values over a specified period",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_min: Real, out_max: Real],
            },
            {
                MinMaxIndex, minmaxindex, "MINMAXINDEX", TA_MINMAXINDEX, TA_MINMAXINDEX_Lookback, MathOperator, "Indexes of lowest and highest values over a specified period",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_min_idx: Integer, out_max_idx: Integer],
            },
            {
                MinusDi, minus_di, "MINUS_DI", TA_MINUS_DI, TA_MINUS_DI_Lookback, Momentum, "Minus Directional Indicator",
                [high, low, close],
                [time_period: Int = 14 => [1, 100000]],
                [out_real: Real],
            },
            {
                MinusDm, minus_dm, "MINUS_DM", TA_MINUS_DM, TA_MINUS_DM_Lookback, Momentum, "Minus Directional Movement",
                [high, low],
                [time_period: Int = 14 => [1, 100000]],
                [out_real: Real],
            },
            {
                Mom, mom, "MOM", TA_MOM, TA_MOM_Lookback, Momentum, "Momentum",
                [real],
                [time_period: Int = 10 => [1, 100000]],
                [out_real: Real],
            },
            {
                Mult, mult, "MULT", TA_MULT, TA_MULT_Lookback, MathOperator, "Vector Arithmetic Mult",
                [real0, real1],
                [],
                [out_real: Real],
            },
            {
                Natr, natr, "NATR", TA_NATR, TA_NATR_Lookback, Volatility, "Normalized Average True Range",
                [high, low, close],
                [time_period: Int = 14 => [1, 100000]],
                [out_real: Real],
            },
            {
                Obv, obv, "OBV", TA_OBV, TA_OBV_Lookback, Volume, "On Balance Volume",
                [real, volume],
                [],
                [out_real: Real],
            },
            {
                PlusDi, plus_di, "PLUS_DI", TA_PLUS_DI, TA_PLUS_DI_Lookback, Momentum, "Plus Directional Indicator",
                [high, low, close],
                [time_period: Int = 14 => [1, 100000]],
                [out_real: Real],
            },
            {
                PlusDm, plus_dm, "PLUS_DM", TA_PLUS_DM, TA_PLUS_DM_Lookback, Momentum, "Plus Directional Movement",
                [high, low],
                [time_period: Int = 14 => [1, 100000]],
                [out_real: Real],
            },
            {
                Ppo, ppo, "PPO", TA_PPO, TA_PPO_Lookback, Momentum, "Percentage Price Oscillator",
                [real],
                [fast_period: Int = 12 => [2, 100000], slow_period: Int = 26 => [2, 100000], ma_type: MaType = 0 => [0, 8]],
                [out_real: Real],
            },
            {
                Roc, roc, "ROC", TA_ROC, TA_ROC_Lookback, Momentum, "Rate of change : ((price/prevPrice)-1)*100",
                [real],
                [time_period: Int = 10 => [1, 100000]],
                [out_real: Real],
            },
            {
                Rocp, rocp, "ROCP", TA_ROCP, TA_ROCP_Lookback, Momentum, "Rate of change Percentage: (price-prevPrice)/prevPrice",
                [real],
                [time_period: Int = 10 => [1, 100000]],
                [out_real: Real],
            },
            {
                Rocr, rocr, "ROCR", TA_ROCR, TA_ROCR_Lookback, Momentum, "Rate of change ratio: (price/prevPrice)",
                [real],
                [time_period: Int = 10 => [1, 100000]],
                [out_real: Real],
            },
            {
                Rocr100, rocr100, "ROCR100", TA_ROCR100, TA_ROCR100_Lookback, Momentum, "Rate of change ratio 100 scale: (price/prevPrice)*100",
                [real],
                [time_period: Int = 10 => [1, 100000]],
                [out_real: Real],
            },
            {
                Rsi, rsi, "RSI", TA_RSI, TA_RSI_Lookback, Momentum, "Relative Strength Index",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Sar, sar, "SAR", TA_SAR, TA_SAR_Lookback, OverlapStudies, "Parabolic Sar",
                [high, low],
                [acceleration: Real = 0.02 => [0.0, 3e37], maximum: Real = 0.2 => [0.0, 3e37]],
                [out_real: Real],
            },
            {
                SarExt, sarext, "SAREXT", TA_SAREXT, TA_SAREXT_Lookback, OverlapStudies, "Parabolic SAR - Extended",
                [high, low],
                [start_value: Real = 0.0 => [-3e37, 3e37], offset_on_reverse: Real = 0.0 => [0.0, 3e37], acceleration_init_long: Real = 0.02 => [0.0, 3e37], acceleration_long: Real = 0.02 => [0.0, 3e37], acceleration_max_long: Real = 0.2 => [0.0, 3e37], acceleration_init_short: Real = 0.02 => [0.0, 3e37], acceleration_short: Real = 0.02 => [0.0, 3e37], acceleration_max_short: Real = 0.2 => [0.0, 3e37]],
                [out_real: Real],
            },
            {
                Sin, sin, "SIN", TA_SIN, TA_SIN_Lookback, MathTransform, "Vector Trigonometric Sin",
                [real],
                [],
                [out_real: Real],
            },
            {
                Sinh, sinh, "SINH", TA_SINH, TA_SINH_Lookback, MathTransform, "Vector Trigonometric Sinh",
                [real],
                [],
                [out_real: Real],
            },
            {
                Sma, sma, "SMA", TA_SMA, TA_SMA_Lookback, OverlapStudies, "Simple Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                Sqrt, sqrt, "SQRT", TA_SQRT, TA_SQRT_Lookback, MathTransform, "Vector Square Root",
                [real],
                [],
                [out_real: Real],
            },
            {
                StdDev, stddev, "STDDEV", TA_STDDEV, TA_STDDEV_Lookback, Statistic, "Standard Deviation",
                [real],
                [time_period: Int = 5 => [2, 100000], nb_dev: Real = 1.0 => [-3e37, 3e37]],
                [out_real: Real],
            },
            {
                Stoch, stoch, "STOCH", TA_STOCH, TA_STOCH_Lookback, Momentum, "Stochastic",
                [high, low, close],
                [fast_k_period: Int = 5 => [1, 100000], slow_k_period: Int = 3 => [1, 100000], slow_k_ma_type: MaType = 0 => [0, 8], slow_d_period: Int = 3 => [1, 100000], slow_d_ma_type: MaType = 0 => [0, 8]],
                [out_slow_k: Real, out_slow_d: Real],
            },
            {
                Stochf, stochf, "STOCHF", TA_STOCHF, TA_STOCHF_Lookback, Momentum, "Stochastic Fast",
                [high, low, close],
                [fast_k_period: Int = 5 => [1, 100000], fast_d_period: Int = 3 => [1, 100000], fast_d_ma_type: MaType = 0 => [0, 8]],
                [out_fast_k: Real, out_fast_d: Real],
            },
            {
                StochRsi, stochrsi, "STOCHRSI", TA_STOCHRSI, TA_STOCHRSI_Lookback, Momentum, "Stochastic Relative Strength Index",
                [real],
                [time_period: Int = 14 => [2, 100000], fast_k_period: Int = 5 => [1, 100000], fast_d_period: Int = 3 => [1, 100000], fast_d_ma_type: MaType = 0 => [0, 8]],
                [out_fast_k: Real, out_fast_d: Real],
            },
            {
                Sub, sub, "SUB", TA_SUB, TA_SUB_Lookback, MathOperator, "Vector Arithmetic Substraction",
                [real0, real1],
                [],
                [out_real: Real],
            },
            {
                Sum, sum, "SUM", TA_SUM, TA_SUM_Lookback, MathOperator, "Summation",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                T3, t3, "T3", TA_T3, TA_T3_Lookback, OverlapStudies, "Triple Exponential Moving Average (T3)",
                [real],
                [time_period: Int = 5 => [2, 100000], v_factor: Real = 0.7 => [0.0, 1.0]],
                [out_real: Real],
            },
            {
                Tan, tan, "TAN", TA_TAN, TA_TAN_Lookback, MathTransform, "Vector Trigonometric Tan",
                [real],
                [],
                [out_real: Real],
            },
            {
                Tanh, tanh, "TANH", TA_TANH, TA_TANH_Lookback, MathTransform, "Vector Trigonometric Tanh",
                [real],
                [],
                [out_real: Real],
            },
            {
                Tema, tema, "TEMA", TA_TEMA, TA_TEMA_Lookback, OverlapStudies, "Triple Exponential Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                Trange, trange, "TRANGE", TA_TRANGE, TA_TRANGE_Lookback, Volatility, "True Range",
                [high, low, close],
                [],
                [out_real: Real],
            },
            {
                TriMa, trima, "TRIMA", TA_TRIMA, TA_TRIMA_Lookback, OverlapStudies, "Triangular Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
            {
                Trix, trix, "TRIX", TA_TRIX, TA_TRIX_Lookback, Momentum, "1-day Rate-Of-Change (ROC) of a Triple Smooth EMA",
                [real],
                [time_period: Int = 30 => [1, 100000]],
                [out_real: Real],
            },
            {
                Tsf, tsf, "TSF", TA_TSF, TA_TSF_Lookback, Statistic, "Time Series Forecast",
                [real],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                TypPrice, typprice, "TYPPRICE", TA_TYPPRICE, TA_TYPPRICE_Lookback, PriceTransform, "Typical Price",
                [high, low, close],
                [],
                [out_real: Real],
            },
            {
                UltOsc, ultosc, "ULTOSC", TA_ULTOSC, TA_ULTOSC_Lookback, Momentum, "Ultimate Oscillator",
                [high, low, close],
                [time_period1: Int = 7 => [1, 100000], time_period2: Int = 14 => [1, 100000], time_period3: Int = 28 => [1, 100000]],
                [out_real: Real],
            },
            {
                Var, var, "VAR", TA_VAR, TA_VAR_Lookback, Statistic, "Variance",
                [real],
                [time_period: Int = 5 => [1, 100000], nb_dev: Real = 1.0 => [-3e37, 3e37]],
                [out_real: Real],
            },
            {
                WclPrice, wclprice, "WCLPRICE", TA_WCLPRICE, TA_WCLPRICE_Lookback, PriceTransform, "Weighted Close Price",
                [high, low, close],
                [],
                [out_real: Real],
            },
            {
                Willr, willr, "WILLR", TA_WILLR, TA_WILLR_Lookback, Momentum, "Williams' %R",
                [high, low, close],
                [time_period: Int = 14 => [2, 100000]],
                [out_real: Real],
            },
            {
                Wma, wma, "WMA", TA_WMA, TA_WMA_Lookback, OverlapStudies, "Weighted Moving Average",
                [real],
                [time_period: Int = 30 => [2, 100000]],
                [out_real: Real],
            },
        }
    };
}

pub(crate) use for_each_function;
