//! JRDB各ファイルのレコードレイアウト
//!
//! オフセットはバイト単位。JRDBの仕様書の位置 (1始まり) から1を引いた値。

use super::types::Field;

pub(crate) static BAC: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("年月日", 8, 8),
    Field::text("発走時間", 16, 4),
    Field::text("距離", 20, 4),
    Field::text("芝ダ障害コード", 24, 1),
    Field::text("右左", 25, 1),
    Field::text("内外", 26, 1),
    Field::text("種別", 27, 2),
    Field::text("条件", 29, 2),
    Field::text("記号", 31, 3),
    Field::text("重量", 34, 1),
    Field::text("グレード", 35, 1),
    Field::text("レース名", 36, 50),
    Field::text("回数", 86, 8),
    Field::text("頭数", 94, 2),
    Field::text("コース", 96, 1),
    Field::text("開催区分", 97, 1),
    Field::text("レース名短縮", 98, 8),
    Field::text("レース名９文字", 106, 18),
    Field::text("データ区分", 124, 1),
    Field::text("１着賞金", 125, 5),
    Field::text("２着賞金", 130, 5),
    Field::text("３着賞金", 135, 5),
    Field::text("４着賞金", 140, 5),
    Field::text("５着賞金", 145, 5),
    Field::text("１着算入賞金", 150, 5),
    Field::text("２着算入賞金", 155, 5),
    Field::text("馬券発売フラグ", 160, 16),
    Field::text("WIN5フラグ", 176, 1),
    Field::text("予備", 177, 5),
];

pub(crate) static CHA: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("曜日", 10, 2),
    Field::text("調教年月日", 12, 8),
    Field::text("回数", 20, 1),
    Field::text("調教コースコード", 21, 2),
    Field::text("追切種類", 23, 1),
    Field::text("追い状態", 24, 2),
    Field::text("乗り役", 26, 1),
    Field::text("調教Ｆ", 27, 1),
    Field::text("テンＦ", 28, 3),
    Field::text("中間Ｆ", 31, 3),
    Field::text("終いＦ", 34, 3),
    Field::text("テンＦ指数", 37, 3),
    Field::text("中間Ｆ指数", 40, 3),
    Field::text("終いＦ指数", 43, 3),
    Field::text("追切指数", 46, 3),
    Field::text("併せ結果", 49, 1),
    Field::text("追切種類（併せ馬）", 50, 1),
    Field::text("年齢", 51, 2),
    Field::text("クラス", 53, 2),
    Field::text("予備", 55, 7),
];

pub(crate) static CYB: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("調教タイプ", 10, 2),
    Field::text("調教コース種別", 12, 1),
    Field::text("坂", 13, 2),
    Field::text("Ｗ", 15, 2),
    Field::text("ダ", 17, 2),
    Field::text("芝", 19, 2),
    Field::text("プ", 21, 2),
    Field::text("障", 23, 2),
    Field::text("ポ", 25, 2),
    Field::text("調教距離", 27, 1),
    Field::text("調教重点", 28, 1),
    Field::text("追切指数", 29, 3),
    Field::text("仕上指数", 32, 3),
    Field::text("調教量評価", 35, 1),
    Field::text("仕上指数変化", 36, 1),
    Field::text("調教コメント", 37, 40),
    Field::text("コメント年月日", 77, 8),
    Field::text("調教評価", 85, 1),
    Field::text("一週前追切指数", 86, 3),
    Field::text("一週前追切コース", 89, 2),
    Field::text("予備", 91, 3),
];

pub(crate) static CZA: &[Field] = &[
    Field::text("調教師コード", 0, 5),
    Field::text("登録抹消フラグ", 5, 1),
    Field::text("登録抹消年月日", 6, 8),
    Field::text("調教師名", 14, 12),
    Field::text("調教師カナ", 26, 30),
    Field::text("調教師名略称", 56, 6),
    Field::text("所属コード", 62, 1),
    Field::text("所属地域名", 63, 4),
    Field::text("生年月日", 67, 8),
    Field::text("初免許年", 75, 4),
    Field::text("調教師コメント", 79, 40),
    Field::text("コメント入力年月日", 119, 8),
    Field::text("本年リーディング", 127, 3),
    Field::text("本年平地成績", 130, 12),
    Field::text("本年障害成績", 142, 12),
    Field::text("本年特別勝数", 154, 3),
    Field::text("本年重賞勝数", 157, 3),
    Field::text("昨年リーディング", 160, 3),
    Field::text("昨年平地成績", 163, 12),
    Field::text("昨年障害成績", 175, 12),
    Field::text("昨年特別勝数", 187, 3),
    Field::text("昨年重賞勝数", 190, 3),
    Field::text("通算平地成績", 193, 20),
    Field::text("通算障害成績", 213, 20),
    Field::text("データ年月日", 233, 8),
    Field::text("予備", 241, 29),
];

pub(crate) static JOA: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("血統登録番号", 10, 8),
    Field::text("馬名", 18, 36),
    Field::text("基準オッズ", 54, 5),
    Field::text("基準複勝オッズ", 59, 5),
    Field::text("CID調教素点", 64, 5),
    Field::text("CID厩舎素点", 69, 5),
    Field::text("CID素点", 74, 5),
    Field::text("CID", 79, 3),
    Field::text("LS指数", 82, 5),
    Field::text("LS評価", 87, 1),
    Field::text("EM", 88, 1),
    Field::text("厩舎ＢＢ印", 89, 1),
    Field::text("厩舎ＢＢ◎単勝回収率", 90, 5),
    Field::text("厩舎ＢＢ◎連対率", 95, 5),
    Field::text("騎手ＢＢ印", 100, 1),
    Field::text("騎手ＢＢ◎単勝回収率", 101, 5),
    Field::text("騎手ＢＢ◎連対率", 106, 5),
    Field::text("予備", 111, 3),
];

pub(crate) static KAB: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("年月日", 6, 8),
    Field::text("開催区分", 14, 1),
    Field::text("曜日", 15, 2),
    Field::text("場名", 17, 4),
    Field::text("天候コード", 21, 1),
    Field::text("芝馬場状態コード", 22, 2),
    Field::text("芝馬場状態内", 24, 1),
    Field::text("芝馬場状態中", 25, 1),
    Field::text("芝馬場状態外", 26, 1),
    Field::text("芝馬場差", 27, 3),
    Field::text("直線馬場差最内", 30, 2),
    Field::text("直線馬場差内", 32, 2),
    Field::text("直線馬場差中", 34, 2),
    Field::text("直線馬場差外", 36, 2),
    Field::text("直線馬場差大外", 38, 2),
    Field::text("ダ馬場状態コード", 40, 2),
    Field::text("ダ馬場状態内", 42, 1),
    Field::text("ダ馬場状態中", 43, 1),
    Field::text("ダ馬場状態外", 44, 1),
    Field::text("ダ馬場差", 45, 3),
    Field::text("データ区分", 48, 1),
    Field::text("連続何日目", 49, 2),
    Field::text("芝種類", 51, 1),
    Field::text("草丈", 52, 4),
    Field::text("転圧", 56, 1),
    Field::text("凍結防止剤", 57, 1),
    Field::text("中間降水量", 58, 5),
    Field::text("予備", 63, 7),
];

pub(crate) static KKA: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("ＪＲＡ成績", 10, 12),
    Field::text("交流成績", 22, 12),
    Field::text("他成績", 34, 12),
    Field::text("芝ダ障害別成績", 46, 12),
    Field::text("芝ダ障害別距離成績", 58, 12),
    Field::text("トラック距離成績", 70, 12),
    Field::text("ローテ成績", 82, 12),
    Field::text("回り成績", 94, 12),
    Field::text("騎手成績", 106, 12),
    Field::text("良成績", 118, 12),
    Field::text("稍成績", 130, 12),
    Field::text("重成績", 142, 12),
    Field::text("Ｓペース成績", 154, 12),
    Field::text("Ｍペース成績", 166, 12),
    Field::text("Ｈペース成績", 178, 12),
    Field::text("季節成績", 190, 12),
    Field::text("枠成績", 202, 12),
    Field::text("騎手距離成績", 214, 12),
    Field::text("騎手トラック距離成績", 226, 12),
    Field::text("騎手調教師別成績", 238, 12),
    Field::text("騎手馬主別成績", 250, 12),
    Field::text("騎手ブリンカ成績", 262, 12),
    Field::text("調教師馬主別成績", 274, 12),
    Field::text("父馬産駒芝連対率", 286, 3),
    Field::text("父馬産駒ダ連対率", 289, 3),
    Field::text("父馬産駒連対平均距離", 292, 4),
    Field::text("母父馬産駒芝連対率", 296, 3),
    Field::text("母父馬産駒ダ連対率", 299, 3),
    Field::text("母父馬産駒連対平均距離", 302, 4),
    Field::text("予備", 306, 16),
];

pub(crate) static KYI: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("血統登録番号", 10, 8),
    Field::text("馬名", 18, 36),
    Field::text("IDM", 54, 5),
    Field::text("騎手指数", 59, 5),
    Field::text("情報指数", 64, 5),
    Field::text("予備1", 69, 5),
    Field::text("予備2", 74, 5),
    Field::text("予備3", 79, 5),
    Field::text("総合指数", 84, 5),
    Field::text("脚質", 89, 1),
    Field::text("距離適性", 90, 1),
    Field::text("上昇度", 91, 1),
    Field::text("ローテーション", 92, 3),
    Field::text("基準オッズ", 95, 5),
    Field::text("基準人気順位", 100, 2),
    Field::text("基準複勝オッズ", 102, 5),
    Field::text("基準複勝人気順位", 107, 2),
    Field::text("特定情報◎", 109, 3),
    Field::text("特定情報○", 112, 3),
    Field::text("特定情報▲", 115, 3),
    Field::text("特定情報△", 118, 3),
    Field::text("特定情報×", 121, 3),
    Field::text("総合情報◎", 124, 3),
    Field::text("総合情報○", 127, 3),
    Field::text("総合情報▲", 130, 3),
    Field::text("総合情報△", 133, 3),
    Field::text("総合情報×", 136, 3),
    Field::text("人気指数", 139, 5),
    Field::text("調教指数", 144, 5),
    Field::text("厩舎指数", 149, 5),
    Field::text("調教矢印コード", 154, 1),
    Field::text("厩舎評価コード", 155, 1),
    Field::text("騎手期待連対率", 156, 4),
    Field::text("激走指数", 160, 3),
    Field::text("蹄コード", 163, 2),
    Field::text("重適正コード", 165, 1),
    Field::text("クラスコード", 166, 2),
    Field::text("予備4", 168, 2),
    Field::text("ブリンカー", 170, 1),
    Field::text("騎手名", 171, 12),
    Field::text("負担重量", 183, 3),
    Field::text("見習い区分", 186, 1),
    Field::text("調教師名", 187, 12),
    Field::text("調教師所属", 199, 4),
    Field::text("前走1競走成績キー", 203, 16),
    Field::text("前走2競走成績キー", 219, 16),
    Field::text("前走3競走成績キー", 235, 16),
    Field::text("前走4競走成績キー", 251, 16),
    Field::text("前走5競走成績キー", 267, 16),
    Field::text("前走1レースキー", 283, 8),
    Field::text("前走2レースキー", 291, 8),
    Field::text("前走3レースキー", 299, 8),
    Field::text("前走4レースキー", 307, 8),
    Field::text("前走5レースキー", 315, 8),
    Field::text("枠番", 323, 1),
    Field::text("予備5", 324, 2),
    Field::text("総合印", 326, 1),
    Field::text("IDM印", 327, 1),
    Field::text("情報印", 328, 1),
    Field::text("騎手印", 329, 1),
    Field::text("厩舎印", 330, 1),
    Field::text("調教印", 331, 1),
    Field::text("激走印", 332, 1),
    Field::text("芝適性コード", 333, 1),
    Field::text("ダ適性コード", 334, 1),
    Field::text("騎手コード", 335, 5),
    Field::text("調教師コード", 340, 5),
    Field::text("予備6", 345, 1),
    Field::text("賞金情報_獲得賞金", 346, 6),
    Field::text("賞金情報_収得賞金", 352, 5),
    Field::text("条件クラス", 357, 1),
    Field::text("テン指数", 358, 5),
    Field::text("ペース指数", 363, 5),
    Field::text("上がり指数", 368, 5),
    Field::text("位置指数", 373, 5),
    Field::text("ペース予想", 378, 1),
    Field::text("道中順位", 379, 2),
    Field::text("道中差", 381, 2),
    Field::text("道中内外", 383, 1),
    Field::text("後3F順位", 384, 2),
    Field::text("後3F差", 386, 2),
    Field::text("後3F内外", 388, 1),
    Field::text("ゴール順位", 389, 2),
    Field::text("ゴール差", 391, 2),
    Field::text("ゴール内外", 393, 1),
    Field::text("展開記号", 394, 1),
    Field::text("距離適性２", 395, 1),
    Field::text("枠確定馬体重", 396, 3),
    Field::text("枠確定馬体重増減", 399, 3),
    Field::text("取消フラグ", 402, 1),
    Field::text("性別コード", 403, 1),
    Field::text("馬主名", 404, 40),
    Field::text("馬主会コード", 444, 2),
    Field::text("馬記号コード", 446, 2),
    Field::text("激走順位", 448, 2),
    Field::text("LS指数順位", 450, 2),
    Field::text("テン指数順位", 452, 2),
    Field::text("ペース指数順位", 454, 2),
    Field::text("上がり指数順位", 456, 2),
    Field::text("位置指数順位", 458, 2),
    Field::text("騎手期待単勝率", 460, 4),
    Field::text("騎手期待３着内率", 464, 4),
    Field::text("輸送区分", 468, 1),
    Field::text("走法", 469, 8),
    Field::text("体型", 477, 24),
    Field::text("体型総合１", 501, 3),
    Field::text("体型総合２", 504, 3),
    Field::text("体型総合３", 507, 3),
    Field::text("馬特記１", 510, 3),
    Field::text("馬特記２", 513, 3),
    Field::text("馬特記３", 516, 3),
    Field::text("馬スタート指数", 519, 4),
    Field::text("馬出遅率", 523, 4),
    Field::text("参考前走", 527, 2),
    Field::text("参考前走騎手コード", 529, 5),
    Field::text("万券指数", 534, 3),
    Field::text("万券印", 537, 1),
    Field::text("降級フラグ", 538, 1),
    Field::text("激走タイプ", 539, 2),
    Field::text("休養理由分類コード", 541, 2),
    Field::text("フラグ", 543, 16),
    Field::text("入厩何走目", 559, 2),
    Field::text("入厩年月日", 561, 8),
    Field::text("入厩何日前", 569, 3),
    Field::text("放牧先", 572, 50),
    Field::text("放牧先ランク", 622, 1),
    Field::text("厩舎ランク", 623, 1),
    Field::text("予備7", 624, 398),
    Field::text("改行", 1022, 2),
];

pub(crate) static KZA: &[Field] = &[
    Field::text("騎手コード", 0, 5),
    Field::text("登録抹消フラグ", 5, 1),
    Field::text("登録抹消年月日", 6, 8),
    Field::text("騎手名", 14, 12),
    Field::text("騎手カナ", 26, 30),
    Field::text("騎手名略称", 56, 6),
    Field::text("所属コード", 62, 1),
    Field::text("所属地域名", 63, 4),
    Field::text("生年月日", 67, 8),
    Field::text("初免許年", 75, 4),
    Field::text("見習い区分", 79, 1),
    Field::text("所属厩舎", 80, 5),
    Field::text("騎手コメント", 85, 40),
    Field::text("コメント入力年月日", 125, 8),
    Field::text("本年リーディング", 133, 3),
    Field::text("本年平地成績", 136, 12),
    Field::text("本年障害成績", 148, 12),
    Field::text("本年特別勝数", 160, 3),
    Field::text("本年重賞勝数", 163, 3),
    Field::text("昨年リーディング", 166, 3),
    Field::text("昨年平地成績", 169, 12),
    Field::text("昨年障害成績", 181, 12),
    Field::text("昨年特別勝数", 193, 3),
    Field::text("昨年重賞勝数", 196, 3),
    Field::text("通算平地成績", 199, 20),
    Field::text("通算障害成績", 219, 20),
    Field::text("データ年月日", 239, 8),
    Field::text("予備", 247, 23),
];

pub(crate) static MZA: &[Field] = &[
    Field::text("血統登録番号", 0, 8),
    Field::text("予備", 8, 6),
];

pub(crate) static OT: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("登録頭数", 8, 2),
    Field::repeated("３連複オッズ", 10, 6, 816),
    Field::text("予備", 4906, 4),
];

pub(crate) static OU: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("登録頭数", 8, 2),
    Field::repeated("馬単オッズ", 10, 6, 306),
    Field::text("予備", 1846, 8),
];

pub(crate) static OV: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("登録頭数", 8, 2),
    Field::repeated("３連単オッズ", 10, 7, 4896),
    Field::text("予備", 34282, 4),
];

pub(crate) static OW: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("登録頭数", 8, 2),
    Field::repeated("ワイドオッズ", 10, 5, 153),
    Field::text("予備", 775, 3),
];

pub(crate) static OZ: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("登録頭数", 8, 2),
    Field::repeated("単勝オッズ", 10, 5, 18),
    Field::repeated("複勝オッズ", 100, 5, 18),
    Field::repeated("連勝オッズ", 190, 5, 153),
];

pub(crate) static SED: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("血統登録番号", 10, 8),
    Field::text("年月日", 18, 8),
    Field::text("馬名", 26, 36),
    Field::text("距離", 62, 4),
    Field::text("芝ダ障害コード", 66, 1),
    Field::text("右左", 67, 1),
    Field::text("内外", 68, 1),
    Field::text("馬場状態", 69, 2),
    Field::text("種別", 71, 2),
    Field::text("条件", 73, 2),
    Field::text("記号", 75, 3),
    Field::text("重量", 78, 1),
    Field::text("グレード", 79, 1),
    Field::text("レース名", 80, 50),
    Field::text("頭数", 130, 2),
    Field::text("レース名略称", 132, 8),
    Field::text("着順", 140, 2),
    Field::text("異常区分", 142, 1),
    Field::text("タイム", 143, 4),
    Field::text("斤量", 147, 3),
    Field::text("騎手名", 150, 12),
    Field::text("調教師名", 162, 12),
    Field::text("確定単勝オッズ", 174, 6),
    Field::text("確定単勝人気順位", 180, 2),
    Field::text("ＩＤＭ", 182, 3),
    Field::text("素点", 185, 3),
    Field::text("馬場差", 188, 3),
    Field::text("ペース", 191, 3),
    Field::text("出遅", 194, 3),
    Field::text("位置取", 197, 3),
    Field::text("不利", 200, 3),
    Field::text("前不利", 203, 3),
    Field::text("中不利", 206, 3),
    Field::text("後不利", 209, 3),
    Field::text("レース", 212, 3),
    Field::text("コース取り", 215, 1),
    Field::text("上昇度コード", 216, 1),
    Field::text("クラスコード", 217, 2),
    Field::text("馬体コード", 219, 1),
    Field::text("気配コード", 220, 1),
    Field::text("レースペース", 221, 1),
    Field::text("馬ペース", 222, 1),
    Field::text("テン指数", 223, 5),
    Field::text("上がり指数", 228, 5),
    Field::text("ペース指数", 233, 5),
    Field::text("レースＰ指数", 238, 5),
    Field::text("1(2)着馬名", 243, 12),
    Field::text("1(2)着タイム差", 255, 3),
    Field::text("前３Ｆタイム", 258, 3),
    Field::text("後３Ｆタイム", 261, 3),
    Field::text("備考", 264, 24),
    Field::text("予備", 288, 2),
    Field::text("確定複勝オッズ下", 290, 6),
    Field::text("10時単勝オッズ", 296, 6),
    Field::text("10時複勝オッズ", 302, 6),
    Field::text("コーナー順位１", 308, 2),
    Field::text("コーナー順位２", 310, 2),
    Field::text("コーナー順位３", 312, 2),
    Field::text("コーナー順位４", 314, 2),
    Field::text("前３Ｆ先頭差", 316, 3),
    Field::text("後３Ｆ先頭差", 319, 3),
    Field::text("騎手コード", 322, 5),
    Field::text("調教師コード", 327, 5),
    Field::text("馬体重", 332, 3),
    Field::text("馬体重増減", 335, 3),
    Field::text("天候コード", 338, 1),
    Field::text("コース", 339, 1),
    Field::text("レース脚質", 340, 1),
    Field::text("単勝", 341, 7),
    Field::text("複勝", 348, 7),
    Field::text("本賞金", 355, 5),
    Field::text("収得賞金", 360, 5),
    Field::text("レースペース流れ", 365, 2),
    Field::text("馬ペース流れ", 367, 2),
    Field::text("４角コース取り", 369, 1),
    Field::text("発走時間", 370, 4),
    Field::text("改行", 374, 2),
];

pub(crate) static SKB: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::text("馬番", 8, 2),
    Field::text("血統登録番号", 10, 8),
    Field::text("年月日", 18, 8),
    Field::repeated("特記コード", 26, 3, 6),
    Field::repeated("馬具コード", 44, 3, 8),
    Field::text("脚元コード_総合", 68, 3),
    Field::text("脚元コード_左前", 71, 3),
    Field::text("脚元コード_右前", 74, 3),
    Field::text("脚元コード_左後", 77, 3),
    Field::text("脚元コード_右後", 80, 3),
    Field::text("パドックコメント", 83, 40),
    Field::text("脚元コメント", 123, 40),
    Field::text("馬具(その他)コメント", 163, 40),
    Field::text("レースコメント", 203, 40),
    Field::text("ハミ", 243, 3),
    Field::text("バンテージ", 246, 3),
    Field::text("蹄鉄", 249, 3),
    Field::text("蹄状態", 252, 3),
    Field::text("ソエ", 255, 3),
    Field::text("骨瘤", 258, 3),
    Field::text("予備", 261, 11),
];

pub(crate) static SRB: &[Field] = &[
    Field::text("場コード", 0, 2),
    Field::text("年", 2, 2),
    Field::text("回", 4, 1),
    Field::hex_day("日", 5),
    Field::text("Ｒ", 6, 2),
    Field::repeated("ハロンタイム", 9, 3, 18),
    Field::text("１コーナー", 63, 64),
    Field::text("２コーナー", 127, 64),
    Field::text("３コーナー", 191, 64),
    Field::text("４コーナー", 255, 64),
    Field::repeated("ペースアップ位置", 319, 1, 2),
    Field::text("１角", 321, 3),
    Field::text("２角", 324, 3),
    Field::text("向正", 327, 3),
    Field::text("３角", 330, 3),
    Field::text("４角", 333, 5),
    Field::text("直線", 338, 5),
    Field::text("レースコメント", 343, 500),
    Field::text("予備", 843, 8),
];

pub(crate) static UKC: &[Field] = &[
    Field::text("血統登録番号", 0, 8),
    Field::text("馬名", 8, 36),
    Field::text("性別コード", 44, 1),
    Field::text("毛色コード", 45, 2),
    Field::text("馬記号コード", 47, 2),
    Field::text("父馬名", 49, 36),
    Field::text("母馬名", 85, 36),
    Field::text("母父馬名", 121, 36),
    Field::text("生年月日", 157, 8),
    Field::text("父馬生年", 165, 4),
    Field::text("母馬生年", 169, 4),
    Field::text("母父馬生年", 173, 4),
    Field::text("馬主名", 177, 40),
    Field::text("馬主会コード", 217, 2),
    Field::text("生産者名", 219, 40),
    Field::text("産地名", 259, 8),
    Field::text("登録抹消フラグ", 267, 1),
    Field::text("データ年月日", 268, 8),
    Field::text("父系統コード", 276, 4),
    Field::text("母父系統コード", 280, 4),
    Field::text("予備", 284, 6),
];
