#![forbid(unsafe_code)]

//! Built-in schema tables shipped with the storefront.
//!
//! Pure data. Keys are product names exactly as they appear on the catalog
//! cards. To add a product, add a row to each table for its category.

pub(crate) struct DescriptionRow {
    pub name: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub(crate) struct FinishRow {
    pub name: &'static str,
    pub colors: &'static str,
    pub thickness: &'static str,
}

// ---------------------------------------------------------------------------
// Descriptions
// ---------------------------------------------------------------------------

pub(crate) const RUBBER_DESCRIPTIONS: &[DescriptionRow] = &[
    DescriptionRow {
        name: "Tibhar K3 Pro",
        title: "TIBHAR HYBRID K3 PRO",
        content: "Perfectly adapted to the game of the uncompromising offensive player. With its increased sponge hardness and the resulting enhanced power and energy, this rubber enables the player to act even more uncompromisingly.

Hybrid K3 Pro shows its full potential, especially in the opening and when countering the opponent's attacking strokes: extremely high quality and precision. The rubber is also convincing when playing from half distance.

The high ball trajectory gives you the necessary confidence and control to play very powerful and decisive topspins despite the increased distance from the table.

In serve/return actions, the adhering surface and higher ball adhesion to the rubber allow you to generate significantly more spin and to optimally prepare your attacking strokes.

These qualities make Hybrid K3 Pro a rubber of its own and the first choice of many players under TIBHAR contract.",
    },
    DescriptionRow {
        name: "Tibhar K3",
        title: "TIBHAR HYBRID K3",
        content: "The rubber HYBRID K3 combines characteristics that did not appear to be combinable until now.

Despite its enormous tackiness, HYBRID K3 convinces by its high dynamic and powerful catapult effect. The hard sponge represents the basis of high speeds.

The pimple in rubber gives you the sensation that you will be able to counter immediately and effortless your adversary's balls – whether undercut or spin loaded topspins. Because fast rubbers often represent a challenge when it comes to optimal control and good placement, with K3 you will definitely master it.

Experience unlimited possibilities with HYBRID K3.",
    },
    DescriptionRow {
        name: "Tibhar MX-P",
        title: "TIBHAR EVOLUTION MX-P",
        content: "Right after its introduction the rubber MX-P was among the classical attacking rubbers.

Thanks to the perfect adjustment of the pimple geometry we managed to produce a rubber that confers more energy with all attacking balls, hence it is perfectly adapted to any player's game.

You can feel the prolonged ball/bat contact time of the MX-P, which for a rubber with hard sponge confers more sensation. EVOLUTION MX-P chosen by most topspin players willing to feel the necessary pressure of their strokes at the table and at half distance.",
    },
    DescriptionRow {
        name: "Tibhar FX-P",
        title: "TIBHAR EVOLUTION FX-P",
        content: "FX-P is the most flexible and soft version of the EVOLUTION rubber family. This rubber confers a lot of sensation and control in any playing situation.

FX-P is a high-performing rubber proven by the enormous sound resulting from topspin strokes. The rubber surface is rich in spins and its soft sponge with high catapult effect gives the sufficient power necessary for a variable topspin game.

The player who likes to attack near the table and is not willing to concede any ball while playing a risky game will be delighted by the fine tuning of the rubber surface with the soft sponge of the EVOLUTION FX-P.

Thanks to the perfect adjustment of the pimple geometry we managed to produce a rubber that confers more energy with all attacking balls, hence it is perfectly adapted to any player's game.",
    },
    DescriptionRow {
        name: "Joola Fire",
        title: "JOOLA RHYZEN FIRE",
        content: "Add a flame to your game with this latest generation offensive rubber.

Geared for an intricate balance of power and spin, the JOOLA Rhyzen FIRE combines a medium sponge and offers a high ball trajectory for heavy topspin and power looping.

The Sweetzone technology ensures a consistent ball bounce, feeling and exceptional control for your offensive strokes – as well as deftness of touch for subtle plays in serve and return.

It's time to turn up the heat on your opponents with the JOOLA Rhyzen Fire! ☯☯",
    },
    DescriptionRow {
        name: "Joola Ice",
        title: "JOOLA RHYZEN ICE",
        content: "A variable all-round rubber for absolute coolness at the table JOOLA RHYZEN ICE has a coarse-pored 40° MOMENTUM sponge for excellent control and ball feel.

The ENHANCED TRACTION top rubber impresses with a strong grip and pronounced spin generation. The innovative SWEETZONE technology ensures a consistent ball bounce, which increases the consistency and safety of your shots.

Key facts: Optimal balance: Balance between speed and control High flight curve: The spin-oriented pimple structure creates a high flight curve that dramatically increases your hit rate and gives you security.

Sweetzone technology: Increases the optimal hitting area on the surface and ensures a forgiving bounce Catapult effect: The coarse-pored MOMENTUM sponge allows the ball to sink deep at impact and then accelerate strongly. The JOOLA RHYZEN ICE is perfect for variable all-round play.

The particularly soft sponge has sufficient energy reserves to support you with attacking shots h passive shots and short-short play, the surface is generally very calm and controlled, so that returns and blocks can be played with particular precision. This ensures enormous security in the shots and dramatically increases the enjoyment of the game.

Ice cold - always keep a cool head with RHYZEN ICE.\u{200d}",
    },
    DescriptionRow {
        name: "Joola Zack",
        title: "JOOLA ZACK",
        content: "With the ZACK rubber, JOOLA is launching a classic rubber from German production that is specifically designed for all players who want to do without extreme catapult and extreme speed.

It is therefore a high-quality all-round rubber that impresses with good control, placement accuracy and rotation tolerance. Outstanding durability and an extremely good price-performance ratio make the JOOLA ZACK a rubber that lovers of classic rubbers. Produced with the latest German technology, you should not miss out on.

Why you'll love it: The JOOLA ZACK table tennis rubber is the perfect choice for all-round players looking for a rubber that offers control and versatility. With its outstanding durability and production in Germany, it offers excellent value for money.

Enjoy precise ball placement, reliable control and consistent performance in every game. Experience the perfect balance between control and versatility with the JOOLA ZACK - your ideal all-round rubber for every match!",
    },
    DescriptionRow {
        name: "Friendship 729",
        title: "FRIENDSHIP 729",
        content: "The 729 is a medium 43°sponge, controllable, chinese spinny rubber. Its spin generation is great if you brush the ball correctly and your technique is sound.

As the rubber is sticky instead of grippy, it's very easy to ignore incoming spin and put your own on the ball. However, it's not a quick rubber and it also doesn't generate \"easy spin\". This rubber forces you to perfect your techniques, play actively and think about tactics to use it effectively.

This rubber is perfect for learning the sport and developing a spin-oriented style, whether it might be defensive, all-round, or offensive attack.

Perfect For: Beginners and intermediates looking to develop their skills.",
    },
];

pub(crate) const BAT_DESCRIPTIONS: &[DescriptionRow] = &[
    DescriptionRow {
        name: "Tibhar Carbon Attack",
        title: "TIBHAR CARBON ATTACK",
        content: "Tibhar Rapid Carbon light blade, fitted with Joola Rhyzen Fire and Ice, red and black rubbers. The blade combines the lightness and extraordinary playing sensation of Balsa heart veneers with the power and precision of high-tech carbon fibres.

It is a lightweight blade enabling a good control, even at high speed. Its strengths are fast and powerful strokes close to the table and at half distance away from the table.

Due to the lightweight (75grams) and the two carbon layers, players have the necessary decisiveness close or away from the table to play a brilliant offensive game.

What sets the 'Tibhar Carbon Attack' apart from other similar priced bats? Each bat has its rubbers glued and cut in house with edging tape applied to protect the rubbers and blade from accidental damage. When the rubbers wear out simply replace with new ones – this is not possible with most factory made bats.

The Tibhar Carbon Attack is an advanced bat with very good spin, speed and control.",
    },
    DescriptionRow {
        name: "Chila Spin Attack",
        title: "TIBHAR CHILA SPIN ATTACK",
        content: "Tibhar Chila blade, fitted with Joola Zack 'Max' red and black rubbers.

A quality blade used by the former European champion Patrick Chila.

What sets the 'Chila Spin Attack' apart from other similar priced bats? Each bat has its rubbers glued and cut in house with edging tape applied to protect the rubbers and blade from accidental damage.

When the rubbers wear out simply replace with new ones – this is not possible with most factory made bats.

The Chila Spin attack is an advanced bat with very good spin and also control when needed.",
    },
    DescriptionRow {
        name: "Bribar Winning Loop",
        title: "BRIBAR WINNING LOOP",
        content: "All-round Tibhar blade, fitted with Friendship 729 rubber, the rubber has medium speed, but high levels of control and spin.

What sets the Winning Loop apart from other similar priced bats? Each bat has its rubbers glued and cut in house with edging tape applied to protect the rubbers and blade from accidental damage.

When the rubbers wear out simply replace with new ones – this is not possible with most factory made bats.

Bribar have selected a great blade and rubber combination that is used time and again by clubs and coaches to teach the game.

The price – saving over £30.00 on the separate items.

Available with flared handle.",
    },
    DescriptionRow {
        name: "Yinhe Sunray",
        title: "BRIBAR YINHE SUNRAY BAT AND CASE",
        content: "Excellent value-for-money bat for a new player learning the basics of the sport.

All-round blade fitted with spiny, tacky 2.0mm Yinhe rubbers.

The bat offers excellent control and spin capabilities, play loaded chops and feel confident when blocking or attacking.

Good control, good spin, not too fast.

Available with flared handle.",
    },
];

pub(crate) const BLADE_DESCRIPTIONS: &[DescriptionRow] = &[
    DescriptionRow {
        name: "Tibhar Felix Lebrun Hyper Inner Carbon Table Tennis Blade",
        title: "TIBHAR FELIX LEBRUN HYPER INNER CARBON",
        content: "The blade Felix Lebrun Hyper Carbon is as extraordinary as its homonym. Developed with the experts from TIBHAR according to the wishes of the young penholder player from France.

The blended fabric of layers of synthetic carbon fibres placed directly around the core veneer provides the high stiffness that a fast-attacking blade requires. This positioning, however, results in a longer and more sensitive contact with the ball, in contrast to the outer layers of fabric.

This blade is perfectly adapted to players who privilege a fast and attacking game. The blade is ideal for a powerful attacking driving and looping game allowing you to both dominate and counter attack your opponent with total confidence and freedom.

Perfect for advanced players seeking maximum power and precision in their offensive game.",
    },
    DescriptionRow {
        name: "Tibhar Rapid Carbon Light",
        title: "TIBHAR RAPID CARBON LIGHT",
        content: "The blade combines the lightness and extraordinary playing sensation of Balsa heart veneers with the power and precision of high-tech carbon fibres.

It is a lightweight blade enabling a good control, even at high speed. Its strengths are fast and powerful strokes close to the table and at half distance away from the table.

Due to the lightweight (75grams) and the two carbon layers, players have the necessary decisiveness close or away from the table to play a brilliant offensive game.

The perfect balance of speed, control, and lightweight design makes this blade ideal for aggressive players who demand both power and precision.",
    },
    DescriptionRow {
        name: "Tibhar Chila Offensive",
        title: "TIBHAR CHILA OFFENSIVE",
        content: "The Tibhar Chila Offense is one of our most popular selling blade. Now offered to you at an unbelievable price.

Extra light and offensive in pace the Chila Offense is used by the former European Champion, Patrick Chila. A real lightweight in terms of grams (75g) but a true heavyweight in performance.

The balsa core and high speed wood plys are bonded using a special gluing process which create a speedy weapon with good feeling.

You won't have to compromise on speed or on ball feeling with the Tibhar Chila Offensive! Perfect for players seeking professional-level performance at an exceptional value.",
    },
    DescriptionRow {
        name: "Impact Precise Light",
        title: "IMPACT PRECISE LIGHT",
        content: "There has been a move towards light blades and the Precise Light is part of the IMPACT PRO range of blades.

A superb allround attacking blade, very light in weight, with excellent feeling and most importantly optimum balance.

'A really good option for a player who has progressed and wants to upgrade from a pre-made bat, to a custom set-up with a higher quality blade, but still wants to maintain high levels of control.'

The Precise Light offers the perfect stepping stone for developing players who want to enhance their game without sacrificing the control they need to continue improving.",
    },
    DescriptionRow {
        name: "Impact Pure Allround",
        title: "IMPACT PURE ALLROUND",
        content: "The Pure Allround forms part of the IMPACT PURE range, combining top quality materials with great styling.

Impact deliberately went for a heavier than normal blade to increase stability and control. Thanks to the perfect balance the blade doesn't feel weighty. The limba outer veneers ensure optimum feel.

'A really good option for a player who has progressed beyond the beginner stage and wants to upgrade from a pre-made bat, to a custom set-up with a higher quality blade, but still wants to maintain high levels of control.'

Ideal for players who value consistency and control while still having the capability for attacking shots when opportunities arise.",
    },
];

pub(crate) const ACCESSORY_DESCRIPTIONS: &[DescriptionRow] = &[];

// ---------------------------------------------------------------------------
// Specifications
// ---------------------------------------------------------------------------

/// speed, spin, control, strategy, hardness
pub(crate) const RUBBER_SPECS: &[(&str, [&str; 5])] = &[
    ("Tibhar K3 Pro", ["125", "130", "90", "OFF+", "55°"]),
    ("Tibhar K3", ["118", "130", "100", "OFF+", "53°"]),
    ("Tibhar MX-P", ["125", "120", "80", "OFF+", "47°"]),
    ("Tibhar FX-P", ["115", "120", "90", "OFF", "41°"]),
    ("Joola Fire", ["98", "116", "80", "OFF", "45°"]),
    ("Joola Ice", ["92", "115", "88", "OFF", "40°"]),
    ("Joola Zack", ["75", "100", "103", "ALL-ROUND", "42°"]),
    ("Friendship 729", ["50", "102", "100", "ALL-ROUND", "43°"]),
];

/// rubbers (one per line), strategy, plys, handle
pub(crate) const BAT_SPECS: &[(&str, [&str; 4])] = &[
    (
        "Tibhar Carbon Attack",
        [
            "Joola Rhyzen Fire 2.0mm\nJoola Rhyzen Ice 2.0mm",
            "Offensive",
            "5",
            "Flare",
        ],
    ),
    (
        "Chila Spin Attack",
        [
            "Joola Zack Max red\nJoola Zack Max black",
            "Offensive",
            "5",
            "Flare",
        ],
    ),
    (
        "Bribar Winning Loop",
        [
            "Friendship 2.0mm red\nFriendship 2.0mm black",
            "All-Round +",
            "5",
            "Flare",
        ],
    ),
    (
        "Yinhe Sunray",
        [
            "Yinhe 2.0mm red\nYinhe 2.0mm black",
            "All-Round",
            "5",
            "Flare",
        ],
    ),
];

/// plys, weight, speed, control
pub(crate) const BLADE_SPECS: &[(&str, [&str; 4])] = &[
    (
        "Tibhar Felix Lebrun Hyper Inner Carbon Table Tennis Blade",
        ["5+2", "85g", "93", "75"],
    ),
    ("Tibhar Rapid Carbon Light", ["5+2", "75g", "102", "66"]),
    ("Tibhar Chila Offensive", ["5", "75g", "84", "75"]),
    ("Impact Precise Light", ["5", "75-80g", "72", "82"]),
    ("Impact Pure Allround", ["5", "95g", "60", "85"]),
];

/// type, material, size
pub(crate) const ACCESSORY_SPECS: &[(&str, [&str; 3])] = &[];

// ---------------------------------------------------------------------------
// Rubber finishes
// ---------------------------------------------------------------------------

pub(crate) const RUBBER_FINISHES: &[FinishRow] = &[
    FinishRow { name: "Tibhar K3 Pro", colors: "Red, Black", thickness: "2.0mm and Max" },
    FinishRow { name: "Tibhar K3", colors: "Red, Black", thickness: "2.0mm, Max" },
    FinishRow { name: "Tibhar MX-P", colors: "Red, Black", thickness: "2.1mm" },
    FinishRow { name: "Tibhar FX-P", colors: "Red, Black", thickness: "2.0mm" },
    FinishRow { name: "Joola Fire", colors: "Red, Black", thickness: "2.0mm" },
    FinishRow { name: "Joola Ice", colors: "Red, Black, Blue", thickness: "2.0mm" },
    FinishRow { name: "Joola Zack", colors: "Red, Black", thickness: "Max" },
    FinishRow { name: "Friendship 729", colors: "Red, Black", thickness: "2.0mm" },
];
