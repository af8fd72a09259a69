//! Built-in product table.
//!
//! Mirrors the products section of the live site: 26 records across the five
//! categories, stored in display order. Ids 1-5 power transfer, 6
//! distribution, 7-9 EHV switchgear, 10-14 MV switchgear, 15-26 drives and
//! automation.

use crate::types::{ProductCategory, ProductRecord, ProductSpec};

/// Compile-time shape of a catalog entry.
///
/// The label is not stored; it always comes from the category.
pub(crate) struct ProductSeed {
    pub id: u32,
    pub name: &'static str,
    pub category: ProductCategory,
    pub image: &'static str,
    pub short_desc: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub features: &'static [&'static str],
    pub specs: &'static [(&'static str, &'static str)],
    pub applications: &'static str,
}

impl From<&ProductSeed> for ProductRecord {
    fn from(seed: &ProductSeed) -> Self {
        ProductRecord {
            id: seed.id,
            name: seed.name.to_string(),
            category: seed.category,
            category_label: seed.category.display_name().to_string(),
            image: seed.image.to_string(),
            short_desc: seed.short_desc.to_string(),
            description: seed.description.to_string(),
            long_description: seed.long_description.to_string(),
            features: seed.features.iter().map(|f| f.to_string()).collect(),
            specs: seed
                .specs
                .iter()
                .map(|(label, value)| ProductSpec {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            applications: seed.applications.to_string(),
        }
    }
}

pub(crate) static PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: 1,
        name: "Auto Transformers",
        category: ProductCategory::PowerTransfer,
        image: "products/auto-transformers.png",
        short_desc: "High-efficiency voltage conversion for power transmission systems.",
        description: "Auto Transformers are frequently used in power applications to interconnect systems operating at different voltage classes, for example 400 kV to 220 kV for transmission. They are also often used for providing conversions between the two common domestic main voltage bands in the world (400, 200, 66 kV).",
        long_description: "The links between the UK 400 kV and 275 kV SuperGrid networks are normally three-phase autotransformers with taps at the common neutral end. Autotransformers are built with common main winding and a separate low voltage winding. For long distance rural power distribution lines, special autotransformers with automatic tap-changing equipment are inserted as voltage regulators.",
        features: &[
            "Better short circuit strength",
            "Compact design",
            "Durability",
            "Optimum losses",
            "KEMA Tested",
            "Epoxy bonded CTC for improved short circuit withstand",
        ],
        specs: &[
            ("Voltage", "132 to 765 kV"),
            ("Ratings", "50 to 1500 MVA"),
            ("Standard", "ANSI"),
        ],
        applications: "Power transmission, Grid interconnection, Voltage regulation for rural distribution, SuperGrid networks",
    },
    ProductSeed {
        id: 2,
        name: "Chlorinator",
        category: ProductCategory::PowerTransfer,
        image: "products/chlorinator.jpeg",
        short_desc: "Advanced water treatment solutions for safe drinking water.",
        description: "Chlorinator adds chlorine to drinking water to eliminate parasites, bacteria and viruses. Chlorinators are also used for swimming pool water, odor control of slime and marine growths in cooling water towers, circulating water and in service water systems.",
        long_description: "Our chlorinators ensure safe and effective water treatment across various applications. From municipal water supplies to industrial cooling systems, these units deliver precise chlorine dosing for optimal disinfection results with advanced safety features.",
        features: &[
            "Precise chlorine dosing",
            "Automated control systems",
            "Corrosion resistant materials",
            "Low maintenance design",
            "Safety interlocks included",
            "Digital monitoring capability",
        ],
        specs: &[
            ("Capacity", "Custom range"),
            ("Control", "Automated"),
            ("Application", "Industrial & Municipal"),
        ],
        applications: "Drinking water treatment, Swimming pools, Cooling towers, Industrial water systems, Marine applications",
    },
    ProductSeed {
        id: 3,
        name: "Furnace Transformers",
        category: ProductCategory::PowerTransfer,
        image: "products/furnace-transformer.jpg",
        short_desc: "Heavy-duty power solutions for arc and induction furnaces.",
        description: "Furnace Transformers are specially designed to handle the heavy-duty electrical loads required in arc furnaces and induction furnaces. They ensure stable power supply, high efficiency, and durability under extreme operating conditions.",
        long_description: "Our furnace transformers are engineered for the most demanding industrial applications. With robust construction and advanced cooling systems, they deliver consistent performance in steel mills, foundries, and other high-temperature manufacturing environments with minimal maintenance requirements.",
        features: &[
            "Heavy-duty construction",
            "Advanced cooling systems",
            "High overload capacity",
            "Stable voltage regulation",
            "Extended operational life",
            "Low maintenance requirements",
        ],
        specs: &[
            ("Type", "Arc & Induction"),
            ("Duty", "Heavy Industrial"),
            ("Cooling", "ONAN/ONAF"),
        ],
        applications: "Steel manufacturing, Foundries, Metal processing, Industrial heating, Smelting operations",
    },
    ProductSeed {
        id: 4,
        name: "Locomotive & Trackside Transformers",
        category: ProductCategory::PowerTransfer,
        image: "products/locomotive-transformer.png",
        short_desc: "Reliable power solutions for railway operations.",
        description: "Locomotive and Trackside Power Transformers provide reliable and efficient power solutions for railway operations. They are engineered to withstand dynamic loads, ensure smooth traction, and support continuous, safe rail network performance.",
        long_description: "Designed specifically for the demanding railway environment, these transformers handle the unique challenges of traction power systems. From high-speed trains to metro networks, our solutions ensure uninterrupted power delivery with robust vibration resistance.",
        features: &[
            "Dynamic load handling",
            "Vibration resistant design",
            "Compact footprint",
            "High efficiency ratings",
            "Weather resistant enclosure",
            "Quick fault recovery",
        ],
        specs: &[
            ("Application", "Railway Traction"),
            ("Design", "Compact & Robust"),
            ("Performance", "High Efficiency"),
        ],
        applications: "Electric locomotives, Metro systems, High-speed rail, Trackside substations, Railway electrification",
    },
    ProductSeed {
        id: 5,
        name: "Shunt Reactors",
        category: ProductCategory::PowerTransfer,
        image: "products/shunt-reactors.png",
        short_desc: "Grid stability solutions for high-voltage transmission.",
        description: "Shunt Reactors are used to improve power system stability by absorbing excess reactive power in high-voltage transmission lines. They enhance voltage regulation, reduce losses, and ensure efficient grid performance.",
        long_description: "Essential components for modern power grids, shunt reactors manage reactive power to maintain voltage stability across long transmission distances. They prevent over-voltage conditions and optimize power flow efficiency with low-noise operation.",
        features: &[
            "Reactive power compensation",
            "Voltage stabilization",
            "Low noise operation",
            "Oil-immersed design",
            "Gapped core technology",
            "Extended service intervals",
        ],
        specs: &[
            ("Voltage", "Up to 765 kV"),
            ("Type", "Oil Immersed"),
            ("Core", "Gapped Design"),
        ],
        applications: "High-voltage transmission, Grid stabilization, Reactive power management, Long transmission lines",
    },
    ProductSeed {
        id: 6,
        name: "Distribution Transformers",
        category: ProductCategory::Distribution,
        image: "products/distribution-transformer.jpg",
        short_desc: "Essential electrical devices for safe voltage distribution.",
        description: "Distribution Transformer is an essential electrical device used to step down the high voltage from power transmission lines to a lower voltage suitable for safe use in homes, offices, and industries.",
        long_description: "It ensures efficient distribution of electricity at the consumer level while minimizing power losses. These transformers are generally installed on poles, pads, or substations and play a vital role in providing reliable and continuous power supply in the distribution network. They are designed for maximum efficiency and long operational life.",
        features: &[
            "High efficiency design",
            "Low power losses",
            "Pole/Pad mountable",
            "Weather resistant",
            "Long operational life",
            "Minimal maintenance required",
        ],
        specs: &[
            ("Voltage", "11kV to 33kV"),
            ("Installation", "Pole/Pad/Substation"),
            ("Efficiency", "98%+"),
        ],
        applications: "Residential distribution, Commercial buildings, Industrial facilities, Rural electrification, Urban substations",
    },
    ProductSeed {
        id: 7,
        name: "AIS (SF6) Circuit Breaker Up To 800 kV",
        category: ProductCategory::EhvSwitchgear,
        image: "products/ais-sf6-circuit-breaker-up-to-800kv.png",
        short_desc: "High-voltage switching device for air-insulated substations.",
        description: "AIS (Air Insulated Substation) SF₆ Circuit Breaker up to 800 kV is a high-voltage switching device used in air-insulated substations to control, protect, and isolate electrical equipment in transmission networks.",
        long_description: "It utilizes sulfur hexafluoride (SF₆) gas as the insulating and arc-quenching medium, which provides excellent dielectric strength and high interrupting capability, enabling safe and reliable operation even at ultra-high voltages like 800 kV. This technology ensures minimal footprint and maximum reliability.",
        features: &[
            "SF₆ gas insulation",
            "High interrupting capability",
            "Excellent dielectric strength",
            "Ultra-high voltage rated",
            "Reliable arc quenching",
            "Compact design",
        ],
        specs: &[
            ("Voltage", "Up to 800 kV"),
            ("Insulation", "SF₆ Gas"),
            ("Type", "Air Insulated"),
        ],
        applications: "Transmission networks, Air-insulated substations, Grid protection, Power system switching",
    },
    ProductSeed {
        id: 8,
        name: "Disconnector",
        category: ProductCategory::EhvSwitchgear,
        image: "products/disconnector.png",
        short_desc: "High-voltage switching devices for safe equipment isolation.",
        description: "Disconnectors are high-voltage switching devices used to safely isolate electrical equipment for maintenance or inspection. They ensure operational safety, reliability, and uninterrupted power system performance.",
        long_description: "These devices are essential components in substations and transmission networks, providing visible isolation points for maintenance crews. They are designed for reliable operation in harsh environments and comply with international safety standards.",
        features: &[
            "Safe isolation capability",
            "Visible break points",
            "High reliability",
            "Weather resistant",
            "Low maintenance",
            "International standards compliant",
        ],
        specs: &[
            ("Voltage", "Up to 800 kV"),
            ("Operation", "Manual/Motorized"),
            ("Type", "Center/Pantograph"),
        ],
        applications: "Substations, Transmission lines, Equipment isolation, Maintenance safety, Grid operations",
    },
    ProductSeed {
        id: 9,
        name: "GIS Up To 245 kV",
        category: ProductCategory::EhvSwitchgear,
        image: "products/gis-up-to-245-kv.png",
        short_desc: "Compact high-voltage substations with SF₆ gas insulation.",
        description: "Gas Insulated Substation (GIS) up to 245 kV is a compact, high-voltage substation that uses SF₆ gas as the primary insulating and arc-quenching medium instead of air.",
        long_description: "This allows significant reduction in size compared to conventional air-insulated substations. GIS technology up to 245 kV is commonly applied in urban, industrial, and space-constrained areas where reliability, safety, and minimal footprint are critical requirements.",
        features: &[
            "Compact footprint",
            "SF₆ gas insulated",
            "High reliability",
            "Minimal maintenance",
            "Weather independent",
            "Extended service life",
        ],
        specs: &[
            ("Voltage", "Up to 245 kV"),
            ("Insulation", "SF₆ Gas"),
            ("Design", "Compact/Modular"),
        ],
        applications: "Urban substations, Industrial areas, Space-constrained locations, Underground installations",
    },
    ProductSeed {
        id: 10,
        name: "AIS Up To 40.5 kV",
        category: ProductCategory::MvSwitchgear,
        image: "products/ais-up-to-40.5-kv.png",
        short_desc: "Safe and reliable medium-voltage power distribution.",
        description: "AIS up to 40.5 kV (Air Insulated Switchgear) delivers safe, reliable, and cost-effective power distribution. Designed for medium-voltage networks, it ensures efficient operation, easy maintenance, and long service life.",
        long_description: "Our air-insulated switchgear solutions provide robust protection for medium-voltage networks with proven technology. They offer excellent value while maintaining high safety standards and easy serviceability for maintenance teams.",
        features: &[
            "Cost-effective design",
            "Easy maintenance",
            "Reliable operation",
            "Long service life",
            "Safe switching",
            "Proven technology",
        ],
        specs: &[
            ("Voltage", "Up to 40.5 kV"),
            ("Type", "Air Insulated"),
            ("Application", "Medium Voltage"),
        ],
        applications: "Medium-voltage networks, Industrial distribution, Commercial buildings, Utility substations",
    },
    ProductSeed {
        id: 11,
        name: "GIS Up To 66 kV",
        category: ProductCategory::MvSwitchgear,
        image: "products/gis-up-to-66-kv-1.jpg",
        short_desc: "Compact and reliable gas-insulated switchgear solutions.",
        description: "GIS up to 66 kV (Gas Insulated Switchgear) offers compact, reliable, and high-performance power distribution. With minimal space requirements and enhanced safety, it ensures efficient operation and long-term reliability.",
        long_description: "Ideal for demanding environments where space is at a premium, our GIS solutions combine SF₆ gas technology with modular design for maximum flexibility. They require minimal maintenance and provide decades of reliable service.",
        features: &[
            "Minimal space requirement",
            "Enhanced safety features",
            "High performance",
            "Long-term reliability",
            "Modular design",
            "Low maintenance",
        ],
        specs: &[
            ("Voltage", "Up to 66 kV"),
            ("Insulation", "SF₆ Gas"),
            ("Design", "Compact/Modular"),
        ],
        applications: "Industrial facilities, Commercial complexes, Urban distribution, Mining operations",
    },
    ProductSeed {
        id: 12,
        name: "Numeric Protection Relay & SCADA",
        category: ProductCategory::MvSwitchgear,
        image: "products/numeric-protection-relay-scada-640x495.png",
        short_desc: "Intelligent monitoring and control for power systems.",
        description: "Numeric Protection Relays and SCADA provide intelligent monitoring and control for power systems. They ensure fast fault detection, reliable protection, and real-time data management for efficient and secure grid operations.",
        long_description: "Our advanced protection relay and SCADA systems offer comprehensive grid management capabilities. With high-speed communication protocols and user-friendly interfaces, they enable operators to monitor and control power systems with precision.",
        features: &[
            "Fast fault detection",
            "Real-time monitoring",
            "Remote control capability",
            "Data logging & analysis",
            "Multiple protocol support",
            "User-friendly interface",
        ],
        specs: &[
            ("Communication", "IEC 61850/Modbus"),
            ("Protection", "Multi-function"),
            ("Monitoring", "Real-time"),
        ],
        applications: "Grid automation, Substation control, Power system protection, Remote monitoring, Energy management",
    },
    ProductSeed {
        id: 13,
        name: "RMU Up To 36 kV",
        category: ProductCategory::MvSwitchgear,
        image: "products/rmu-up-to-36-kv.png",
        short_desc: "Compact ring main units for safe power distribution.",
        description: "RMU up to 36 kV (Ring Main Unit) offers safe, compact, and reliable medium-voltage power distribution. It ensures uninterrupted supply, easy maintenance, and enhanced operational safety.",
        long_description: "Ring Main Units are essential components for urban and industrial distribution networks. Our RMU solutions provide flexible configuration options, ensuring reliable power supply with quick fault isolation capabilities for network resilience.",
        features: &[
            "Compact design",
            "Reliable switching",
            "Quick fault isolation",
            "Easy maintenance",
            "Flexible configuration",
            "Enhanced safety",
        ],
        specs: &[
            ("Voltage", "Up to 36 kV"),
            ("Type", "Ring Main Unit"),
            ("Insulation", "SF₆/Solid"),
        ],
        applications: "Urban networks, Industrial distribution, Commercial areas, Renewable energy integration",
    },
    ProductSeed {
        id: 14,
        name: "Vacuum Interrupter",
        category: ProductCategory::MvSwitchgear,
        image: "products/vaccum-interrupter.jpg",
        short_desc: "High-performance switching for medium and high-voltage systems.",
        description: "Vacuum Interrupters are high-performance switching devices used to interrupt electrical currents safely in medium and high-voltage systems. They ensure reliable operation, long service life, and minimal maintenance.",
        long_description: "Our vacuum interrupters utilize advanced vacuum technology for clean and efficient current interruption. With no arc products or gases, they provide environmentally friendly switching with exceptional reliability and longevity.",
        features: &[
            "Clean current interruption",
            "Environmentally friendly",
            "Long service life",
            "Minimal maintenance",
            "High reliability",
            "Fast operation",
        ],
        specs: &[
            ("Voltage", "Up to 40.5 kV"),
            ("Technology", "Vacuum"),
            ("Life", "30,000+ operations"),
        ],
        applications: "Circuit breakers, Contactors, Load switches, Reclosers, Motor controllers",
    },
    ProductSeed {
        id: 15,
        name: "Blowers",
        category: ProductCategory::DrivesAutomation,
        image: "products/blower.jpg",
        short_desc: "Essential equipment for forced air circulation in industrial systems.",
        description: "Blowers are essential equipment for forced air circulation in industrial systems, ensuring efficient cooling, ventilation, and optimal performance of electrical and mechanical installations.",
        long_description: "Our industrial blowers are designed for continuous operation in demanding environments. They provide reliable airflow for cooling systems, pneumatic conveying, and ventilation applications with energy-efficient performance.",
        features: &[
            "High airflow capacity",
            "Energy efficient",
            "Low noise operation",
            "Robust construction",
            "Variable speed options",
            "Easy maintenance",
        ],
        specs: &[
            ("Type", "Centrifugal/Positive"),
            ("Application", "Industrial"),
            ("Control", "VFD Compatible"),
        ],
        applications: "Cooling systems, Ventilation, Pneumatic conveying, Industrial processes, HVAC systems",
    },
    ProductSeed {
        id: 16,
        name: "Centrifuges",
        category: ProductCategory::DrivesAutomation,
        image: "products/centrifuge.jpg",
        short_desc: "Precision machines for rapid separation of liquids and solids.",
        description: "Centrifuges are precision machines designed for rapid separation of liquids and solids, ensuring high efficiency, reliability, and consistent performance in industrial and laboratory applications.",
        long_description: "Our centrifuge solutions offer advanced separation technology for various industries. From pharmaceutical to food processing, they deliver precise separation results with automated controls and safety features.",
        features: &[
            "High-speed separation",
            "Precision control",
            "Automated operation",
            "Safety interlocks",
            "Easy cleaning",
            "Multiple configurations",
        ],
        specs: &[
            ("Speed", "Up to 15,000 RPM"),
            ("Control", "PLC/HMI"),
            ("Material", "SS316/SS304"),
        ],
        applications: "Pharmaceutical, Food processing, Chemical industry, Wastewater treatment, Oil & gas",
    },
    ProductSeed {
        id: 17,
        name: "Compressors",
        category: ProductCategory::DrivesAutomation,
        image: "products/compress.jpg",
        short_desc: "Critical equipment for high-pressure air or gas supply.",
        description: "Compressors are critical equipment that provide high-pressure air or gas for industrial processes, ensuring efficient operation, reliability, and optimal system performance.",
        long_description: "Our compressor range includes rotary screw, reciprocating, and centrifugal types for various applications. They feature advanced controls for energy optimization and reliable operation in continuous industrial use.",
        features: &[
            "High pressure capability",
            "Energy efficient motors",
            "Advanced controls",
            "Low vibration",
            "Oil-free options",
            "Remote monitoring",
        ],
        specs: &[
            ("Pressure", "Up to 500 bar"),
            ("Type", "Screw/Reciprocating"),
            ("Drive", "Electric/Diesel"),
        ],
        applications: "Manufacturing, Mining, Oil & gas, Food & beverage, Pharmaceutical",
    },
    ProductSeed {
        id: 18,
        name: "Cranes",
        category: ProductCategory::DrivesAutomation,
        image: "products/cranes.jpg",
        short_desc: "Robust lifting solutions for heavy load handling.",
        description: "Cranes are robust lifting solutions designed for safe and efficient handling of heavy loads in industrial and construction environments, ensuring precision, reliability, and operational safety.",
        long_description: "Our crane solutions range from overhead bridge cranes to gantry and jib cranes. They feature advanced safety systems, precision controls, and robust construction for demanding material handling applications.",
        features: &[
            "Heavy lifting capacity",
            "Precision controls",
            "Advanced safety systems",
            "Variable speed drives",
            "Anti-collision systems",
            "Remote operation",
        ],
        specs: &[
            ("Capacity", "Up to 500 tons"),
            ("Type", "EOT/Gantry/Jib"),
            ("Control", "Pendant/Radio"),
        ],
        applications: "Steel plants, Warehouses, Ports, Manufacturing, Construction sites",
    },
    ProductSeed {
        id: 19,
        name: "Crushers",
        category: ProductCategory::DrivesAutomation,
        image: "products/crushers-640x506.jpg",
        short_desc: "Heavy-duty machines for efficient material processing.",
        description: "Crushers are heavy-duty machines engineered to break down rocks, ores, and other materials efficiently. They ensure high productivity, durability, and consistent performance in industrial applications.",
        long_description: "Our crusher range includes jaw, cone, impact, and gyratory types for various crushing applications. They feature wear-resistant components, hydraulic adjustment, and automation for optimal crushing efficiency.",
        features: &[
            "High crushing capacity",
            "Wear-resistant materials",
            "Hydraulic adjustment",
            "Automated control",
            "Easy maintenance",
            "Multiple size options",
        ],
        specs: &[
            ("Type", "Jaw/Cone/Impact"),
            ("Capacity", "Up to 2000 TPH"),
            ("Feed Size", "Up to 1500mm"),
        ],
        applications: "Mining, Quarrying, Recycling, Aggregate production, Cement industry",
    },
    ProductSeed {
        id: 20,
        name: "Fans",
        category: ProductCategory::DrivesAutomation,
        image: "products/fan-product-640x640.jpg",
        short_desc: "Essential devices for effective air circulation and cooling.",
        description: "Fans are essential devices for effective air circulation, cooling, and ventilation in industrial and commercial environments, ensuring optimal performance and energy efficiency.",
        long_description: "Our industrial fan range includes axial, centrifugal, and mixed-flow designs for various applications. They feature aerodynamic blade designs, energy-efficient motors, and variable speed controls for optimized airflow.",
        features: &[
            "High airflow efficiency",
            "Energy efficient motors",
            "Low noise design",
            "Corrosion resistant",
            "Variable speed control",
            "Multiple mounting options",
        ],
        specs: &[
            ("Type", "Axial/Centrifugal"),
            ("Flow", "Up to 500,000 CFM"),
            ("Control", "VFD/DOL"),
        ],
        applications: "HVAC systems, Industrial ventilation, Cooling towers, Process cooling, Exhaust systems",
    },
    ProductSeed {
        id: 21,
        name: "Lifts",
        category: ProductCategory::DrivesAutomation,
        image: "products/lifts-960x960.jpg",
        short_desc: "Reliable vertical transportation solutions for buildings.",
        description: "Lifts are reliable vertical transportation solutions designed for safe, efficient, and smooth movement of people and goods in commercial and industrial buildings.",
        long_description: "Our lift solutions include passenger, freight, and specialized industrial elevators. They feature advanced safety systems, energy-efficient drives, and smart controls for optimal vertical transportation.",
        features: &[
            "Smooth operation",
            "Energy efficient drives",
            "Advanced safety systems",
            "Smart controls",
            "Emergency backup",
            "Customizable cabins",
        ],
        specs: &[
            ("Capacity", "Up to 10,000 kg"),
            ("Speed", "Up to 6 m/s"),
            ("Type", "Traction/Hydraulic"),
        ],
        applications: "Commercial buildings, Industrial facilities, Warehouses, Shopping malls, Hospitals",
    },
    ProductSeed {
        id: 22,
        name: "Mills",
        category: ProductCategory::DrivesAutomation,
        image: "products/mills.jpg",
        short_desc: "Heavy-duty machines for grinding and processing materials.",
        description: "Mills are heavy-duty machines designed for grinding, crushing, or processing raw materials efficiently. They ensure high productivity, durability, and consistent performance in industrial operations.",
        long_description: "Our mill range includes ball mills, SAG mills, vertical roller mills, and hammer mills for various grinding applications. They feature advanced wear protection, automated controls, and energy-efficient designs.",
        features: &[
            "High grinding efficiency",
            "Wear-resistant liners",
            "Automated controls",
            "Variable speed drives",
            "Low energy consumption",
            "Multiple size options",
        ],
        specs: &[
            ("Type", "Ball/SAG/VRM"),
            ("Capacity", "Up to 500 TPH"),
            ("Power", "Up to 20 MW"),
        ],
        applications: "Mining, Cement production, Power plants, Mineral processing, Chemical industry",
    },
    ProductSeed {
        id: 23,
        name: "Mixers",
        category: ProductCategory::DrivesAutomation,
        image: "products/mixer.jpg",
        short_desc: "Precision machines for uniform material blending.",
        description: "Mixers are precision machines designed to blend materials uniformly, ensuring consistent quality, efficiency, and reliability in industrial and manufacturing processes.",
        long_description: "Our mixer range includes ribbon blenders, paddle mixers, and high-shear mixers for various applications. They feature stainless steel construction, hygienic design, and precise speed control for optimal mixing results.",
        features: &[
            "Uniform mixing",
            "Hygienic design",
            "Variable speed control",
            "Easy cleaning",
            "Multiple configurations",
            "Automated operation",
        ],
        specs: &[
            ("Type", "Ribbon/Paddle/High-shear"),
            ("Material", "SS316/SS304"),
            ("Capacity", "Up to 50,000L"),
        ],
        applications: "Food processing, Pharmaceutical, Chemical, Cosmetics, Construction materials",
    },
    ProductSeed {
        id: 24,
        name: "PLC",
        category: ProductCategory::DrivesAutomation,
        image: "products/plc-640x640.webp",
        short_desc: "Advanced automation devices for precise process control.",
        description: "PLCs (Programmable Logic Controllers) are advanced automation devices that control industrial processes with precision, reliability, and real-time monitoring, enhancing efficiency and operational safety.",
        long_description: "Our PLC solutions range from compact controllers to distributed control systems. They offer high-speed processing, multiple communication protocols, and robust design for demanding industrial automation applications.",
        features: &[
            "High-speed processing",
            "Multiple I/O options",
            "Network connectivity",
            "Real-time monitoring",
            "Flexible programming",
            "Redundancy options",
        ],
        specs: &[
            ("I/O Points", "Up to 65,536"),
            ("Communication", "Ethernet/Profibus"),
            ("Programming", "IEC 61131-3"),
        ],
        applications: "Factory automation, Process control, Building management, Water treatment, Power systems",
    },
    ProductSeed {
        id: 25,
        name: "Pumps",
        category: ProductCategory::DrivesAutomation,
        image: "products/pumps-640x563.webp",
        short_desc: "Essential equipment for efficient liquid transfer.",
        description: "Pumps are essential equipment for transferring liquids efficiently, ensuring reliable flow, optimal performance, and smooth operation in industrial and commercial systems.",
        long_description: "Our pump range includes centrifugal, positive displacement, and submersible types for various applications. They feature robust construction, energy-efficient motors, and advanced sealing systems for reliable operation.",
        features: &[
            "High flow capacity",
            "Energy efficient",
            "Corrosion resistant",
            "Low maintenance",
            "Variable speed options",
            "Multiple seal types",
        ],
        specs: &[
            ("Type", "Centrifugal/PD/Submersible"),
            ("Flow", "Up to 50,000 m³/h"),
            ("Head", "Up to 1000m"),
        ],
        applications: "Water supply, Wastewater, Oil & gas, Chemical processing, Power generation",
    },
    ProductSeed {
        id: 26,
        name: "Water & Wastewater Solutions",
        category: ProductCategory::DrivesAutomation,
        image: "products/waste-water.jpg",
        short_desc: "Comprehensive treatment and management systems.",
        description: "Water & Wastewater Solutions provide efficient treatment, purification, and management systems, ensuring sustainable water use, environmental compliance, and reliable operation.",
        long_description: "Our water and wastewater solutions include treatment plants, filtration systems, and monitoring equipment. They ensure clean water supply and safe wastewater disposal while meeting environmental regulations and sustainability goals.",
        features: &[
            "Complete treatment systems",
            "Advanced filtration",
            "Automated controls",
            "Real-time monitoring",
            "Energy efficient",
            "Regulatory compliant",
        ],
        specs: &[
            ("Capacity", "Custom MLD"),
            ("Treatment", "Primary/Secondary/Tertiary"),
            ("Monitoring", "SCADA Enabled"),
        ],
        applications: "Municipal water supply, Industrial wastewater, Sewage treatment, Water recycling, Effluent treatment",
    },
];
